#[cfg(test)]
mod run_test {
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::{Duration, Instant};

    use crate::config::Config;
    use crate::device_display::impl_fake::DeviceDisplayFake;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::image_picker::impl_fake::ImagePickerFake;
    use crate::photo_grader::main::PhotoGrader;
    use crate::photo_grader::tests::fixture::selected_image;

    #[test]
    fn test_grades_a_picked_photo_end_to_end() {
        let display = DeviceDisplayFake::new();
        let picker = ImagePickerFake::new(vec![Ok(Some(selected_image("cow.jpg")))]);

        let app = PhotoGrader::new(
            Config::default(),
            Arc::new(picker),
            Arc::new(ImageClassifierFake::new()),
            Arc::new(Mutex::new(display.clone())),
        );

        let runner = app.clone();
        thread::spawn(move || {
            let _ = runner.run();
        });

        // Keep pressing until the subscription is live and the grade lands;
        // presses after the first one resolve as dismissed dialogs.
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            display.press_select();

            let frames = display.frames();
            if frames.iter().any(|frame| frame.headline.is_some()) {
                let busy_seen = frames.iter().any(|frame| frame.busy);
                assert!(busy_seen, "expected an uploading frame before the result");

                let last = frames.last().expect("frames recorded");
                assert!(last.headline.is_some());
                assert!(!last.busy);
                assert_eq!(last.breakdown.len(), 5);
                break;
            }

            if Instant::now() > deadline {
                panic!("no grade rendered before the deadline: {frames:?}");
            }
            thread::sleep(Duration::from_millis(50));
        }
    }
}
