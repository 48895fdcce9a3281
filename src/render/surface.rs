use indexmap::IndexMap;

/// Mount point that hosts one rendered chart.
///
/// Content belongs to whichever engine drew last; each draw replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: String,
    content: Option<String>,
    revision: u64,
}

impl Surface {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: None,
            revision: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Number of draws applied to this surface.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn replace_content(&mut self, content: String) {
        self.content = Some(content);
        self.revision += 1;
    }
}

/// Resolves surface identifiers to mounted surfaces.
pub trait SurfaceHost {
    fn resolve(&mut self, id: &str) -> Option<&mut Surface>;
}

/// Ordered collection of surfaces keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct SurfaceDocument {
    surfaces: IndexMap<String, Surface>,
}

impl SurfaceDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts an empty surface; an existing surface with the same id is kept.
    pub fn mount(&mut self, id: impl Into<String>) -> &mut Surface {
        let id = id.into();
        self.surfaces
            .entry(id.clone())
            .or_insert_with(|| Surface::new(id))
    }

    #[must_use]
    pub fn with_surface(mut self, id: impl Into<String>) -> Self {
        self.mount(id);
        self
    }

    pub fn unmount(&mut self, id: &str) -> Option<Surface> {
        self.surfaces.shift_remove(id)
    }

    #[must_use]
    pub fn surface(&self, id: &str) -> Option<&Surface> {
        self.surfaces.get(id)
    }

    pub fn surface_ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl SurfaceHost for SurfaceDocument {
    fn resolve(&mut self, id: &str) -> Option<&mut Surface> {
        self.surfaces.get_mut(id)
    }
}
