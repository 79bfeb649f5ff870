use crate::core::{Analyser, VisualizerError, VisualizerParams};
use web_sys as web;

/// WebAudio analyser tapped between a media element and the speakers.
pub struct WebAnalyser {
    // Keeps the graph alive for the rest of the session.
    _audio_ctx: web::AudioContext,
    node: web::AnalyserNode,
}

impl Analyser for WebAnalyser {
    fn bin_count(&self) -> usize {
        self.node.frequency_bin_count() as usize
    }

    fn frequency_data(&self, buf: &mut [u8]) {
        self.node.get_byte_frequency_data(buf);
    }

    fn time_domain_data(&self, buf: &mut [u8]) {
        self.node.get_byte_time_domain_data(buf);
    }
}

// source -> analyser -> destination
pub fn create_analyser(
    media: &web::HtmlMediaElement,
    params: &VisualizerParams,
) -> Result<WebAnalyser, VisualizerError> {
    let audio_ctx = web::AudioContext::new()
        .map_err(|e| VisualizerError::Unsupported(format!("AudioContext: {:?}", e)))?;
    _ = audio_ctx.resume();

    let node = web::AnalyserNode::new(&audio_ctx)
        .map_err(|e| VisualizerError::Unsupported(format!("AnalyserNode: {:?}", e)))?;
    node.set_fft_size(params.fft_size);

    let source = audio_ctx
        .create_media_element_source(media)
        .map_err(|e| VisualizerError::SourceUnavailable(format!("{:?}", e)))?;
    source
        .connect_with_audio_node(&node)
        .map_err(|e| VisualizerError::Graph(format!("source -> analyser: {:?}", e)))?;
    node.connect_with_audio_node(&audio_ctx.destination())
        .map_err(|e| VisualizerError::Graph(format!("analyser -> destination: {:?}", e)))?;

    Ok(WebAnalyser {
        _audio_ctx: audio_ctx,
        node,
    })
}
