pub mod catalog;
pub mod config;
pub mod deck;
pub mod environment;
pub mod error;
pub mod events;
pub mod gesture;
pub mod profile;
pub mod render;
pub mod tasks {
    pub mod deck;
    pub mod input;
    pub mod recommendations;
    pub mod viewer;
}

pub use deck::WindowedCircularDeck;
pub use error::Error;
