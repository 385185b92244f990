pub const URL_PATH_COUNTRIES: &str = "/countries";
