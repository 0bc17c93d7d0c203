//! Shared fixtures for playback integration tests

#![allow(dead_code)]

use podcastr_playback::{
    Episode, ListenerId, MediaFile, PlaybackConfig, PlaybackError, PlayerSession,
    RenderingSurface, Result,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Command received by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Load { url: String, listener: ListenerId },
    Unload,
    Play,
    Pause,
    SetLoop(bool),
    Seek(f64),
}

/// Surface double that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<SurfaceCommand>,
    pub fail_loads: bool,
}

impl RecordingSurface {
    /// Listener handed over by the most recent load
    pub fn last_listener(&self) -> Option<ListenerId> {
        self.commands.iter().rev().find_map(|c| match c {
            SurfaceCommand::Load { listener, .. } => Some(*listener),
            _ => None,
        })
    }

    pub fn loaded_urls(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::Load { url, .. } => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, command: &SurfaceCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }
}

impl RenderingSurface for RecordingSurface {
    fn load(&mut self, media: &MediaFile, listener: ListenerId) -> Result<()> {
        if self.fail_loads {
            return Err(PlaybackError::Surface("network unreachable".to_string()));
        }
        self.commands.push(SurfaceCommand::Load {
            url: media.url.clone(),
            listener,
        });
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.commands.push(SurfaceCommand::Unload);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.commands.push(SurfaceCommand::Play);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.commands.push(SurfaceCommand::Pause);
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) -> Result<()> {
        self.commands.push(SurfaceCommand::SetLoop(looping));
        Ok(())
    }

    fn seek(&mut self, position_secs: f64) -> Result<()> {
        self.commands.push(SurfaceCommand::Seek(position_secs));
        Ok(())
    }
}

pub fn create_test_episode(id: &str) -> Episode {
    Episode {
        id: id.to_string(),
        title: format!("Episode {}", id),
        members: "Diego Fernandes, Tiago Luchtenberg".to_string(),
        thumbnail: format!("https://cdn.example.com/{}.jpg", id),
        file: MediaFile::new(format!("https://cdn.example.com/{}.m4a", id), 1800),
    }
}

pub fn create_test_queue(ids: &[&str]) -> Vec<Episode> {
    ids.iter().map(|id| create_test_episode(id)).collect()
}

pub fn media_url(id: &str) -> String {
    format!("https://cdn.example.com/{}.m4a", id)
}

/// Session with autoplay on and a fixed shuffle seed
pub fn create_test_session() -> PlayerSession<RecordingSurface> {
    PlayerSession::with_rng(
        PlaybackConfig::default(),
        RecordingSurface::default(),
        StdRng::seed_from_u64(42),
    )
}
