mod sms_error_tests;
