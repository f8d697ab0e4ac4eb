use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub public_dir: PathBuf,
    pub history_file: PathBuf,
}
fn default_port() -> u16 { 3000 }

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let port = std::env::var("PORT")
            .ok().and_then(|v| v.parse().ok()).unwrap_or(default_port());
        let public_dir = std::env::var("PUBLIC_DIR")
            .map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("public"));
        let history_file = std::env::var("HISTORY_FILE")
            .map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("URL.txt"));
        Ok(Self { port, public_dir, history_file })
    }
}
