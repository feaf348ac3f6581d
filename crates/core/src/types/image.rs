//! Product image sources.
//!
//! A product image is either a bundled asset resolved by the platform at
//! build time or a remote URI. Bundled assets are referenced through an
//! opaque [`AssetHandle`] that has no string form: it cannot survive a trip
//! through a string-only channel, which is why the product codec swaps it
//! for [`AssetHandle::PLACEHOLDER`] on the receiving side.

/// Opaque reference to a bundled image asset.
///
/// Intentionally not `Serialize`/`Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetHandle(u32);

impl AssetHandle {
    /// The generic coffee placeholder artwork.
    pub const PLACEHOLDER: Self = Self(0);

    /// Wrap a platform asset number.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The platform asset number.
    #[must_use]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Whether this is the placeholder artwork.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER.0
    }
}

/// Where a product image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    /// Bundled asset.
    LocalAsset(AssetHandle),
    /// Remote image URI, kept verbatim.
    RemoteUri(String),
}

impl ImageSource {
    /// Remote image from a URI.
    #[must_use]
    pub fn remote(uri: impl Into<String>) -> Self {
        Self::RemoteUri(uri.into())
    }

    /// The placeholder artwork.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::LocalAsset(AssetHandle::PLACEHOLDER)
    }

    /// The URI if this is a remote image.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::RemoteUri(uri) => Some(uri),
            Self::LocalAsset(_) => None,
        }
    }
}

impl Default for ImageSource {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl From<AssetHandle> for ImageSource {
    fn from(handle: AssetHandle) -> Self {
        Self::LocalAsset(handle)
    }
}
