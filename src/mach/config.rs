/// ## Target settings
///
/// Names the runtime support module included by the program header
/// and the entry word that the header opens.

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub library: String,
    pub entry: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            library: "BasicLib.fs".to_string(),
            entry: "main".to_string(),
        }
    }
}
