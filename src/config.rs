//! Configuration for form document generation.

use crate::geometry::Rect;

/// Standard page sizes for the single page of a form document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter (8.5" x 11")
    #[default]
    Letter,
    /// US Legal (8.5" x 14")
    Legal,
    /// ISO A4 (210mm x 297mm)
    A4,
}

impl PageSize {
    /// Media box for this page size, anchored at the origin.
    pub fn media_box(&self) -> Rect {
        match self {
            PageSize::Letter => Rect::new(0.0, 0.0, 612.0, 792.0),
            PageSize::Legal => Rect::new(0.0, 0.0, 612.0, 1008.0),
            PageSize::A4 => Rect::new(0.0, 0.0, 595.0, 842.0),
        }
    }
}

/// Form document configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentConfig {
    /// PDF version written in the header (e.g., "1.7")
    pub version: String,
    /// Page media box
    pub media_box: Rect,
    /// Whether to compress streams with FlateDecode
    pub compress: bool,
    /// AcroForm default appearance string
    pub default_appearance: String,
    /// Font size used for free-text labels
    pub label_font_size: f32,
    /// Ask viewers to build widget appearances (`NeedAppearances`)
    pub need_appearances: bool,
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Creator application
    pub creator: Option<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            version: "1.7".to_string(),
            media_box: PageSize::Letter.media_box(),
            compress: false,
            default_appearance: "/Helv 12 Tf 0 g".to_string(),
            label_font_size: 12.0,
            need_appearances: true,
            title: None,
            author: None,
            creator: None,
        }
    }
}

impl DocumentConfig {
    /// Create a configuration with defaults (US Letter, PDF 1.7, no compression).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PDF header version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Use a standard page size.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.media_box = size.media_box();
        self
    }

    /// Use an explicit media box.
    pub fn with_media_box(mut self, media_box: Rect) -> Self {
        self.media_box = media_box;
        self
    }

    /// Enable or disable stream compression.
    ///
    /// When enabled, stream objects are compressed using FlateDecode
    /// (zlib/deflate) at serialization time.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the AcroForm default appearance string.
    pub fn with_default_appearance(mut self, da: impl Into<String>) -> Self {
        self.default_appearance = da.into();
        self
    }

    /// Set the font size for labels.
    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    /// Set whether the AcroForm asks viewers to regenerate appearances.
    pub fn with_need_appearances(mut self, need: bool) -> Self {
        self.need_appearances = need;
        self
    }

    /// Set document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set creator application.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Whether any Info dictionary entry is configured.
    pub fn has_info(&self) -> bool {
        self.title.is_some() || self.author.is_some() || self.creator.is_some()
    }
}
