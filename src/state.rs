#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum RendererState {
    #[default]
    Inactive, // Not mounted, or torn down
    Running,  // A frame request is outstanding
}
