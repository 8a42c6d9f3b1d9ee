/// Events emitted by the viewer's controls.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pick an image file and load it.
    LoadImage,
    /// Run the detector over the loaded image.
    RunDetection,
}
