#[cfg(test)]
mod error_tests {
    use std::error::Error;
    use zoomcheck::errors::CameraError;

    #[test]
    fn test_camera_error_open() {
        let error = CameraError::OpenError("Test open error".to_string());
        assert!(error.to_string().contains("Camera open error"));
        assert!(error.to_string().contains("Test open error"));
    }

    #[test]
    fn test_camera_error_bind() {
        let error = CameraError::BindError("surface gone".to_string());
        assert!(error.to_string().contains("Preview bind error"));
        assert!(error.to_string().contains("surface gone"));
    }

    #[test]
    fn test_camera_error_debug_format() {
        let error = CameraError::ControlError("Debug test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ControlError"));
        assert!(debug_str.contains("Debug test"));
    }

    #[test]
    fn test_camera_error_display_trait() {
        let error = CameraError::StreamError("Display test".to_string());
        let display_str = format!("{}", error);
        assert_eq!(display_str, "Preview stream error: Display test");
    }

    #[test]
    fn test_camera_error_implements_error_trait() {
        let error = CameraError::ConfigError("Error trait test".to_string());
        // Test that it implements std::error::Error trait
        let _error_trait: &dyn Error = &error;
        assert!(error.source().is_none()); // CameraError doesn't wrap other errors
    }

    #[test]
    fn test_all_error_variants() {
        let errors = vec![
            CameraError::OpenError("Open error".to_string()),
            CameraError::BindError("Bind error".to_string()),
            CameraError::ControlError("Control error".to_string()),
            CameraError::StreamError("Stream error".to_string()),
            CameraError::ConfigError("Config error".to_string()),
        ];

        for error in errors {
            // Each error should implement Display
            let display_str = error.to_string();
            assert!(!display_str.is_empty());

            // Each error should implement Debug
            let debug_str = format!("{:?}", error);
            assert!(!debug_str.is_empty());
        }
    }

    #[test]
    fn test_error_message_extraction() {
        let test_message = "Detailed error information";

        match CameraError::OpenError(test_message.to_string()) {
            CameraError::OpenError(msg) => assert_eq!(msg, test_message),
            _ => panic!("Wrong error variant"),
        }

        match CameraError::ControlError(test_message.to_string()) {
            CameraError::ControlError(msg) => assert_eq!(msg, test_message),
            _ => panic!("Wrong error variant"),
        }
    }
}
