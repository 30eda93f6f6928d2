/// Presentation settings shared by both sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Printed before each command line.
    pub prompt: String,
    /// Start the inventory with the sample catalogue.
    pub preload_samples: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            preload_samples: true,
        }
    }
}
