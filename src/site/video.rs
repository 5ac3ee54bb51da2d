//! Short-video page thumbnails.
//!
//! After a short-video page is created or edited it gets a thumbnail image:
//! the video's own thumbnail when it has one, then a frame extracted on an
//! earlier run, otherwise the first frame of the video file. This is best
//! effort; a failed extraction is logged and the page is left as it was.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::error::SiteError;
use crate::site::snippets::Image;
use crate::site::{PageKind, Site};
use crate::text::html_to_str;

/// Page lifecycle events the thumbnail hook reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Created,
    Edited,
}

/// Writes a single frame of a video file as an image.
pub trait FrameExtractor {
    fn extract_first_frame(&self, video: &Path, output: &Path) -> Result<()>;
}

/// Extracts frames by shelling out to `ffmpeg`.
#[derive(Debug, Clone)]
pub struct FfmpegFrameExtractor {
    pub binary: String,
}

impl Default for FfmpegFrameExtractor {
    fn default() -> Self {
        Self {
            binary: "ffmpeg".to_string(),
        }
    }
}

impl FrameExtractor for FfmpegFrameExtractor {
    fn extract_first_frame(&self, video: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.binary)
            .arg("-y")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(video)
            .args(["-frames:v", "1"])
            .arg(output)
            .status()
            .with_context(|| format!("Failed to run {}", self.binary))?;

        if !status.success() {
            anyhow::bail!("{} exited with {} for {}", self.binary, status, video.display());
        }
        Ok(())
    }
}

/// Where a generated thumbnail for video `id` is stored.
pub fn thumbnail_path(media_root: &Path, video_id: u32) -> PathBuf {
    media_root
        .join("original_images")
        .join(format!("video_{}_thumbnail.png", video_id))
}

/// Run the thumbnail hook for `page_id`. Pages other than short-video pages
/// are ignored.
///
/// Returns `Ok(true)` when the page got a thumbnail.
pub fn after_page_event(
    site: &mut Site,
    event: PageEvent,
    page_id: u32,
    media_root: &Path,
    extractor: &dyn FrameExtractor,
) -> Result<bool, SiteError> {
    let page_index = site
        .pages
        .iter()
        .position(|page| page.id == page_id)
        .ok_or(SiteError::PageNotFound(page_id))?;

    let (video_id, english_title) = match &site.pages[page_index].kind {
        PageKind::ShortVideoPage {
            video,
            english_title,
            ..
        } => (*video, english_title.clone()),
        _ => return Ok(false),
    };

    let video = site
        .videos
        .iter_mut()
        .find(|video| video.id == video_id)
        .ok_or(SiteError::MissingVideo {
            page: page_id,
            video: video_id,
        })?;

    let file = match video.thumbnail.clone() {
        Some(existing) => existing,
        None => {
            let output = thumbnail_path(media_root, video.id);
            if output.exists() {
                debug!("Reusing extracted thumbnail {}", output.display());
            } else if let Err(e) = prepare_and_extract(extractor, Path::new(&video.file), &output) {
                warn!(
                    "Thumbnail extraction failed for video {} ({:?}): {:#}",
                    video.id, event, e
                );
                return Ok(false);
            }
            let file = output.to_string_lossy().into_owned();
            video.thumbnail = Some(file.clone());
            file
        }
    };

    let thumbnail = Image {
        title: html_to_str(&english_title, false),
        file,
    };
    info!(
        "Short video page {} thumbnail set to {} ({:?})",
        page_id, thumbnail.file, event
    );

    if let PageKind::ShortVideoPage { thumbnail: slot, .. } = &mut site.pages[page_index].kind {
        *slot = Some(thumbnail);
    }
    Ok(true)
}

fn prepare_and_extract(extractor: &dyn FrameExtractor, video: &Path, output: &Path) -> Result<()> {
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    extractor.extract_first_frame(video, output)
}

/// Run the hook for every short-video page, as if each had just been created.
pub fn refresh_thumbnails(
    site: &mut Site,
    media_root: &Path,
    extractor: &dyn FrameExtractor,
) -> usize {
    let ids: Vec<u32> = site
        .pages
        .iter()
        .filter(|page| matches!(page.kind, PageKind::ShortVideoPage { .. }))
        .map(|page| page.id)
        .collect();

    let mut updated = 0;
    for id in ids {
        match after_page_event(site, PageEvent::Created, id, media_root, extractor) {
            Ok(true) => updated += 1,
            Ok(false) => {}
            Err(e) => warn!("Skipping thumbnail for page {}: {}", id, e),
        }
    }
    updated
}
