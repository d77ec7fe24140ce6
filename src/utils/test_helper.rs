//! Helpers for unit tests that inspect captured log output.
//!
//! **Note**: This module is only compiled and used during testing.

#[cfg(test)]
pub mod test_helper {
    use log::Level;

    /// Assert that exactly the given warnings were logged (in order). Each expected entry only
    /// needs to be contained in the corresponding log message.
    pub fn check_warnings(expected_warnings: Vec<&str>) {
        testing_logger::validate(|captured_logs| {
            let warnings: Vec<_> = captured_logs
                .iter()
                .filter(|l| l.level == Level::Warn)
                .collect();
            assert_eq!(
                warnings.len(),
                expected_warnings.len(),
                "unexpected number of warnings: {:?}",
                warnings.iter().map(|w| &w.body).collect::<Vec<_>>()
            );
            for (log, expected) in warnings.iter().zip(expected_warnings.iter()) {
                assert!(
                    log.body.contains(expected),
                    "warning '{}' does not contain '{expected}'",
                    log.body
                );
            }
        });
    }
}
