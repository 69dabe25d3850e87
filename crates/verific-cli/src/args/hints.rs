pub mod cmd {
    pub const CONFIG_INIT: &str = "verific config init";
    pub const CONFIG_SHOW: &str = "verific config show";
    pub const GROUP: &str = "verific group <file> --date-field <path>";
    pub const SCHEDULE: &str = "verific schedule <file>";
}
