mod server_tests;
mod smoke_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic config and wiring checks
// - pipeline_tests: Event filtering, batching and preamble selection
// - format_tests: Embed layout and date span rendering
// - server_tests: The HTTP trigger and its guard header
