//! The static photo catalog.
//!
//! The catalog is hardcoded and loaded synchronously; there is no remote
//! source. The first photo doubles as the hero's "photo of the day".

use serde::{Deserialize, Serialize};

use gallery_core::types::price::deserialize_lenient;
use gallery_core::{Category, PhotoId, Price};

/// A photo offered for sale.
///
/// Cart entries are copies of these, so the serialized form is also the cart
/// blob format. A missing or invalid `price` loads as zero and a missing
/// `bestSeller` as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: PhotoId,
    pub title: String,
    pub category: Category,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub price: Price,
    /// Image asset reference.
    #[serde(rename = "src")]
    pub image_ref: String,
    #[serde(default)]
    pub best_seller: bool,
}

impl PhotoRecord {
    /// Create a record that isn't a best seller.
    #[must_use]
    pub fn new(
        id: i32,
        title: &str,
        category: Category,
        price: Price,
        image_ref: &str,
    ) -> Self {
        Self {
            id: PhotoId::new(id),
            title: title.to_string(),
            category,
            price,
            image_ref: image_ref.to_string(),
            best_seller: false,
        }
    }

    /// Mark the record as a best seller.
    #[must_use]
    pub fn as_best_seller(mut self) -> Self {
        self.best_seller = true;
        self
    }
}

/// The immutable list of photos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    photos: Vec<PhotoRecord>,
}

impl Catalog {
    /// Build a catalog from records.
    #[must_use]
    pub const fn new(photos: Vec<PhotoRecord>) -> Self {
        Self { photos }
    }

    /// The storefront's built-in photos.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            PhotoRecord::new(
                1,
                "Samurai King Resting",
                Category::Pets,
                Price::ZERO,
                "./images/pexels-evgeny-tchebotarev-2187304 (1) 1.png",
            ),
            PhotoRecord::new(
                2,
                "Red Bench",
                Category::People,
                Price::from_cents(389),
                "./images/Group 40.png",
            )
            .as_best_seller(),
            PhotoRecord::new(
                3,
                "Egg Balloon",
                Category::Food,
                Price::from_cents(9389),
                "./images/Group 25.png",
            ),
            PhotoRecord::new(
                4,
                "Egg Balloon 2",
                Category::Food,
                Price::from_cents(9389),
                "./images/Group 25 (1).png",
            ),
            PhotoRecord::new(
                5,
                "Man",
                Category::People,
                Price::from_dollars(100),
                "./images/Group 26.png",
            ),
            PhotoRecord::new(
                6,
                "Architecture",
                Category::Landmarks,
                Price::from_dollars(101),
                "./images/Group 48.png",
            ),
            PhotoRecord::new(
                7,
                "Architecture 2",
                Category::Landmarks,
                Price::from_dollars(101),
                "./images/Group 8.png",
            ),
        ])
    }

    /// All photos in catalog order.
    #[must_use]
    pub fn photos(&self) -> &[PhotoRecord] {
        &self.photos
    }

    /// Look up a photo by ID.
    #[must_use]
    pub fn get(&self, id: PhotoId) -> Option<&PhotoRecord> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// The photo of the day shown in the hero.
    #[must_use]
    pub fn featured(&self) -> Option<&PhotoRecord> {
        self.photos.first()
    }

    /// Number of photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Whether the catalog has no photos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Hero Content (static copy for the photo of the day)
// =============================================================================

/// A thumbnail in the hero's "People also buy" strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub image_ref: &'static str,
    pub alt: &'static str,
}

/// Static hero copy that accompanies the featured photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub about: &'static str,
    pub recommendations: Vec<Recommendation>,
    pub dimensions: &'static str,
    pub file_size: &'static str,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            about: "So how did the classical Latin become so incoherent? According to \
                    McClintock, a 15th century typesetter likely scrambled part of Cicero's \
                    De Finibus in order to provide placeholder text to mockup various fonts \
                    for a type specimen book. So how did the classical Latin become so \
                    incoherent? According to McClintock, a 15th century typesetter likely \
                    scrambled part of Cicero's De Finibus in order to provide placeholder.",
            recommendations: vec![
                Recommendation {
                    image_ref: "./images/Rectangle 10.png",
                    alt: "Camera",
                },
                Recommendation {
                    image_ref: "./images/Rectangle 10.1.png",
                    alt: "Frame",
                },
                Recommendation {
                    image_ref: "./images/Rectangle 10.2.png",
                    alt: "Print",
                },
            ],
            dimensions: "1020 x 1020 pixel",
            file_size: "15 MB",
        }
    }
}
