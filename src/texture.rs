use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

/// Decoded RGBA8 image data.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

#[derive(Debug)]
struct Slot {
    status: TextureStatus,
    image: Option<TextureImage>,
}

/// Shared handle to an asynchronously loading texture.
///
/// Loading is fire-and-forget: the handle starts out `Pending` and a mesh
/// using it renders with its material base color until the image resolves,
/// then updates in place. A failed load stays `Failed` forever; that is not
/// an error surfaced to the caller, only a warn log.
#[derive(Debug, Clone)]
pub struct TextureHandle {
    id: u64,
    source: Arc<String>,
    slot: Arc<Mutex<Slot>>,
}

impl TextureHandle {
    /// Start loading `source` on a background thread and return immediately.
    pub fn load(source: &str) -> Self {
        let handle = Self::pending(source);
        let background = handle.clone();
        std::thread::spawn(move || match decode_image(&background.source) {
            Ok(image) => {
                debug!(
                    "texture loaded: {} ({}x{})",
                    background.source, image.width, image.height
                );
                background.resolve(image);
            }
            Err(err) => {
                warn!("texture load failed: {}: {err:#}", background.source);
                background.fail();
            }
        });
        handle
    }

    /// A handle that never resolves on its own; tests and the loader thread
    /// drive it through `resolve`/`fail`.
    pub fn pending(source: &str) -> Self {
        Self {
            id: NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed),
            source: Arc::new(source.to_owned()),
            slot: Arc::new(Mutex::new(Slot {
                status: TextureStatus::Pending,
                image: None,
            })),
        }
    }

    /// Stable identity for renderer-side texture caches.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn status(&self) -> TextureStatus {
        self.slot.lock().map(|s| s.status).unwrap_or(TextureStatus::Failed)
    }

    pub fn is_loaded(&self) -> bool {
        self.status() == TextureStatus::Loaded
    }

    /// Run `f` against the decoded image, if it has arrived.
    pub fn with_image<R>(&self, f: impl FnOnce(&TextureImage) -> R) -> Option<R> {
        let slot = self.slot.lock().ok()?;
        slot.image.as_ref().map(f)
    }

    pub fn resolve(&self, image: TextureImage) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.image = Some(image);
            slot.status = TextureStatus::Loaded;
        }
    }

    pub fn fail(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.status = TextureStatus::Failed;
        }
    }
}

fn decode_image(source: &str) -> Result<TextureImage> {
    let decoded = image::open(source).with_context(|| format!("open {source}"))?;
    let rgba = decoded.to_rgba8();
    Ok(TextureImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_until_settled(handle: &TextureHandle) -> TextureStatus {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let status = handle.status();
            if status != TextureStatus::Pending || Instant::now() > deadline {
                return status;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn pending_handle_has_no_image() {
        let handle = TextureHandle::pending("earth.png");
        assert_eq!(handle.status(), TextureStatus::Pending);
        assert!(handle.with_image(|_| ()).is_none());
    }

    #[test]
    fn resolve_makes_image_visible_to_all_clones() {
        let handle = TextureHandle::pending("moon.png");
        let clone = handle.clone();
        handle.resolve(TextureImage {
            width: 2,
            height: 1,
            rgba: vec![255; 8],
        });
        assert!(clone.is_loaded());
        assert_eq!(clone.with_image(|img| img.width), Some(2));
        assert_eq!(clone.id(), handle.id());
    }

    #[test]
    fn missing_file_settles_to_failed() {
        let handle = TextureHandle::load("/definitely/not/a/real/texture.png");
        assert_eq!(wait_until_settled(&handle), TextureStatus::Failed);
        assert!(handle.with_image(|_| ()).is_none());
    }

    #[test]
    fn real_file_settles_to_loaded() {
        let dir = std::env::temp_dir();
        let path = dir.join("scene_kit_texture_test.png");
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let handle = TextureHandle::load(path.to_str().unwrap());
        assert_eq!(wait_until_settled(&handle), TextureStatus::Loaded);
        assert_eq!(handle.with_image(|i| (i.width, i.height)), Some((4, 4)));
    }

    #[test]
    fn handles_have_distinct_ids() {
        let a = TextureHandle::pending("a.png");
        let b = TextureHandle::pending("b.png");
        assert_ne!(a.id(), b.id());
    }
}
