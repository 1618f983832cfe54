mod tests_body_control;
mod tests_properties;
mod tests_scenarios;
