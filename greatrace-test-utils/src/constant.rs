pub static TEST_USER_AGENT: &str = "GreatRace/0.1 (test-suite; +https://greatrace.gg)";
