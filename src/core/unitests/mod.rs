mod test_configuration;
