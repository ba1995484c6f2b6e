mod app;
mod config;
mod draw;
mod frame_pacer;

pub use app::App;
use config::Config;
use frame_pacer::FramePacer;
