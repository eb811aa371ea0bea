mod album;
mod artist;
mod ids;
mod playlist;
mod provider;
mod search;
mod song;

pub use album::Album;
pub use artist::Artist;
pub use ids::{EntityRef, ProviderId};
pub use playlist::Playlist;
pub use provider::ProviderStatus;
pub use search::SearchResult;
pub use song::Song;
