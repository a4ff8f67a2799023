mod dashboard_tests;
mod insights_tests;
