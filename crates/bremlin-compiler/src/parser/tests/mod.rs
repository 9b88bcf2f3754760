mod errors_tests;
