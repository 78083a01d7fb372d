mod log_policy_tests;
