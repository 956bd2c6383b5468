use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub display: Display,
    pub logo: Logo,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Display {
    pub title: String,
    pub resolution: (u32, u32),
    pub resizable: bool,
    pub vsync: bool,
    /// Use the logo as the window icon
    pub set_icon: bool,
    pub background: (u8, u8, u8),
}

#[derive(Deserialize, Debug, Clone)]
pub struct Logo {
    /// Applied to the decoded image size to get the on-screen size
    pub scale: f32,
    pub initial_position: (f32, f32),
    /// Pixels/second
    pub initial_velocity: (f32, f32),
}
