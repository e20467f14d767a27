#[cfg(test)]
mod render_test {
    use std::sync::{Arc, Mutex};

    use crate::device_display::impl_fake::DeviceDisplayFake;
    use crate::photo_grader::core::{init, transition, Event, Model, RequestId, UploadPhase};
    use crate::photo_grader::render::{format_percent, view, Render};
    use crate::photo_grader::tests::fixture::{prediction, selected_image};

    fn succeeded_model() -> Model {
        Model {
            phase: UploadPhase::Succeeded {
                image: selected_image("cow.jpg"),
                result: prediction(),
            },
            notice: None,
            issued: RequestId::default().next(),
        }
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.8), "80.00%");
        assert_eq!(format_percent(0.2), "20.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(1.0), "100.00%");
        assert_eq!(format_percent(0.125), "12.50%");
    }

    #[test]
    fn test_idle_frame_is_empty() {
        let (model, _) = init();

        let frame = view(&model);

        assert!(frame.preview.is_none());
        assert!(!frame.busy);
        assert!(frame.headline.is_none());
        assert!(frame.breakdown.is_empty());
        assert!(frame.error.is_none());
    }

    #[test]
    fn test_uploading_frame_shows_preview_and_spinner() {
        let (model, _) = init();
        let (model, _) = transition(model, Event::PickDone(Ok(Some(selected_image("cow.jpg")))));

        let frame = view(&model);

        assert_eq!(
            frame.preview,
            Some(selected_image("cow.jpg").path)
        );
        assert!(frame.busy);
        assert!(frame.headline.is_none());
        assert!(frame.error.is_none());
    }

    #[test]
    fn test_succeeded_frame_formats_percentages() {
        let frame = view(&succeeded_model());

        assert!(!frame.busy);
        assert_eq!(frame.headline, Some("A (80.00%)".to_string()));
        assert_eq!(
            frame.breakdown,
            vec!["A: 80.00%".to_string(), "B: 20.00%".to_string()]
        );
    }

    #[test]
    fn test_failed_frame_carries_the_message() {
        let model = Model {
            phase: UploadPhase::Failed {
                image: selected_image("cow.jpg"),
                message: "upload failed: connection refused".to_string(),
            },
            notice: None,
            issued: RequestId::default().next(),
        };

        let frame = view(&model);

        assert!(!frame.busy);
        assert_eq!(
            frame.error,
            Some("upload failed: connection refused".to_string())
        );
        assert!(frame.breakdown.is_empty());
    }

    #[test]
    fn test_notice_survives_the_projection() {
        let mut model = succeeded_model();
        model.notice = Some("image picker failed: library unavailable".to_string());

        let frame = view(&model);

        assert_eq!(
            frame.notice,
            Some("image picker failed: library unavailable".to_string())
        );
        // The old result still renders under the notice.
        assert!(frame.headline.is_some());
    }

    #[test]
    fn test_render_pushes_frames_to_the_display() {
        let fake = DeviceDisplayFake::new();
        let render = Render::new(Arc::new(Mutex::new(fake.clone())));

        render.render(&succeeded_model()).expect("render");

        let frames = fake.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].breakdown[0], "A: 80.00%");
    }
}
