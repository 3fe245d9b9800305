pub fn get_home_directory() -> String {
    std::env::var("HOME")
        .expect("HOME environment variable not set")
}

pub fn get_config_directory() -> String {
    let home = get_home_directory();
    format!("{}/.config/powerbox", home)
}
