pub mod catalog;
pub mod daily;
pub mod forget;
pub mod seed;
pub mod share;
pub mod surprise;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tarot_deck::Catalog;
use tarot_draw::draw::SPREAD_SIZE;
use tarot_draw::{
    DrawEngine, DrawMode, DrawResult, FileStore, KeyValueStore, MemoryStore, Pacing,
    ReadingConfig, ReadingService, RevealState, Summary,
};
use tracing::{debug, warn};

/// Store chosen at runtime: the data directory, or memory when it is unusable.
type Store = Box<dyn KeyValueStore>;

/// Options shared by every subcommand.
pub struct Context {
    data_dir: Option<PathBuf>,
    deck: Option<PathBuf>,
    config: ReadingConfig,
}

impl Context {
    pub fn new(data_dir: Option<PathBuf>, deck: Option<PathBuf>, pace: f64) -> Self {
        Self {
            data_dir,
            deck,
            config: ReadingConfig::default().with_pace(pace),
        }
    }

    pub fn pacing(&self) -> Pacing {
        self.config.pacing
    }

    /// The built-in deck, or the `--deck` override once it passes validation.
    pub fn catalog(&self) -> Result<Catalog, String> {
        let override_deck = match &self.deck {
            Some(path) => Some(Catalog::read_override(path).map_err(|e| e.to_string())?),
            None => None,
        };
        self.config
            .catalog(override_deck)
            .map_err(|e| e.to_string())
    }

    /// A reading service backed by the data directory.
    ///
    /// An unusable data directory is not fatal: the reading runs on in-memory
    /// stores, so it gets a fresh device id and is not remembered.
    pub fn service(&self) -> Result<ReadingService<Store, Store>, String> {
        let engine = DrawEngine::new(self.catalog()?);
        let (identity, cache): (Store, Store) = match FileStore::open(self.data_dir.clone()) {
            Ok(store) => {
                debug!(dir = %store.dir().display(), "data directory");
                (Box::new(store.clone()), Box::new(store))
            }
            Err(e) => {
                warn!(error = %e, "data directory unusable, nothing will be saved");
                (Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
            }
        };
        Ok(ReadingService::new(engine, identity, cache))
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Shuffle, lay out, reveal each card in turn, then summarize.
fn present(draw: &DrawResult, pacing: &Pacing) {
    let title = match draw.mode {
        DrawMode::Daily => format!("Daily Light Tarot · {}", draw.day_key),
        DrawMode::Surprise => format!("Daily Light Tarot · surprise · {}", draw.day_key),
    };
    println!("  {}", title.bold());
    println!();

    println!("  {}", "Shuffling the deck…".dimmed());
    pause(pacing.shuffle);
    let face_down = ["[ ? ]"; SPREAD_SIZE].join("  ");
    println!("  {face_down}");
    println!();

    let mut state = RevealState::new();
    while let Some(index) = state.next_hidden() {
        let Some(card) = state.reveal(draw, index) else {
            break;
        };
        println!("  {}", card.heading().bold());
        println!("  {}", card.pick.position.help().italic());
        println!("  {}", card.meta().dimmed());
        println!("  {}", card.message());
        println!();
        pause(pacing.reveal_pause);
    }

    println!("  {}", "Your reading is ready.".italic());
    println!();
    pause(pacing.ready_pause);

    for line in Summary::of(draw).to_string().lines() {
        println!("  {line}");
    }
}
