use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, error, info};

use crate::builder::watcher::fs_watcher::{ChangeEvent, EventSource, Poll};
use crate::config::SiteConfig;
use crate::layout::{LayoutRenderer, StandaloneContext};
use crate::markdown::{Flavor, MarkdownRenderer};
use crate::utils::error::BoxResult;
use crate::utils::{fs, path};

/// How long the run loop waits for an event before checking for shutdown
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Converts one Markdown file whenever it changes.
///
/// Events closer than the debounce interval to the last event-driven
/// conversion are dropped. The startup conversion does not count.
pub struct MarkdownWatcher {
    input: PathBuf,
    output: PathBuf,
    debounce: Duration,
    last_conversion: Option<Instant>,
    conversions: usize,
    title: String,
    stylesheet: String,
    renderer: MarkdownRenderer,
    layouts: LayoutRenderer,
}

impl MarkdownWatcher {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, config: &SiteConfig) -> BoxResult<Self> {
        Ok(MarkdownWatcher {
            input: path::absolutize(input),
            output: path::absolutize(output),
            debounce: config.debounce(),
            last_conversion: None,
            conversions: 0,
            title: config.watch_title.clone(),
            stylesheet: config.watch_stylesheet.clone(),
            renderer: MarkdownRenderer::new(Flavor::FencedCode),
            layouts: LayoutRenderer::new()?,
        })
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of successful conversions so far
    pub fn conversions(&self) -> usize {
        self.conversions
    }

    /// Handle one change event. Returns whether a conversion ran.
    pub fn on_change(&mut self, event: &ChangeEvent) -> bool {
        debug!("Change event for: {}", event.path.display());

        if !path::same_file_path(&event.path, &self.input) {
            return false;
        }

        if let Some(last) = self.last_conversion {
            if event.at.saturating_duration_since(last) < self.debounce {
                debug!("Change event ignored due to debounce.");
                return false;
            }
        }

        self.last_conversion = Some(event.at);
        info!("Change detected in {}", self.input.display());
        self.convert();
        true
    }

    /// Read, render and write once. Failures are logged, never returned.
    pub fn convert(&mut self) -> bool {
        debug!("Converting markdown to HTML...");

        let markdown = match fs::read_file(&self.input) {
            Ok(markdown) => markdown,
            Err(e) => {
                error!("Error reading input file {}: {}", self.input.display(), e);
                return false;
            }
        };

        let body = self.renderer.render(&markdown);
        let html = match self.layouts.render_standalone(&StandaloneContext {
            title: &self.title,
            stylesheet: &self.stylesheet,
            body: &body,
        }) {
            Ok(html) => html,
            Err(e) => {
                error!("Error rendering {}: {}", self.input.display(), e);
                return false;
            }
        };

        if let Err(e) = fs::write_file(&self.output, &html) {
            error!("Error writing output file {}: {}", self.output.display(), e);
            return false;
        }

        self.conversions += 1;
        info!("Conversion complete: '{}' -> '{}'", self.input.display(), self.output.display());
        true
    }

    /// Consume events until `stop` is set or the source closes
    pub fn run<S: EventSource + ?Sized>(&mut self, source: &mut S, stop: &AtomicBool) {
        while !stop.load(Ordering::SeqCst) {
            match source.poll(POLL_INTERVAL) {
                Poll::Event(event) => {
                    self.on_change(&event);
                }
                Poll::Timeout => {}
                Poll::Closed => {
                    debug!("Event source closed");
                    break;
                }
            }
        }
    }
}
