use chrono::{DateTime, Utc};

use crate::{
    assets::loader::{AssetSource, load_assets},
    composition::{config::ExportConfig, constants::FrameStyle, request::ExportSettings},
    encode::{
        png::encode_png,
        sink::{ExportSink, ExportedArtifact, artifact_file_name},
    },
    foundation::error::{ShotframeError, ShotframeResult},
    render::compositor::Compositor,
};

/// Load, compose, encode, emit.
///
/// One pipeline holds a validated [`ExportConfig`] and may run any number of independent exports;
/// every export owns its own surface.
#[derive(Clone, Debug)]
pub struct ExportPipeline {
    config: ExportConfig,
    compositor: Compositor,
}

impl ExportPipeline {
    pub fn new(config: ExportConfig) -> ShotframeResult<Self> {
        config.validate()?;
        let compositor = Compositor::from_config(&config);
        Ok(Self { config, compositor })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Export `settings` over the user's photo into `sink`.
    ///
    /// Without a user photo nothing is loaded or emitted and `Ok(None)` is returned. Any load,
    /// compose, or encode failure aborts before the sink sees anything.
    pub fn export(
        &self,
        settings: &ExportSettings,
        user_image: Option<&AssetSource>,
        sink: &mut dyn ExportSink,
    ) -> ShotframeResult<Option<ExportedArtifact>> {
        self.export_at(settings, user_image, sink, Utc::now())
    }

    /// [`ExportPipeline::export`] with an explicit timestamp for the artifact name.
    #[tracing::instrument(skip(self, settings, user_image, sink))]
    pub fn export_at(
        &self,
        settings: &ExportSettings,
        user_image: Option<&AssetSource>,
        sink: &mut dyn ExportSink,
        at: DateTime<Utc>,
    ) -> ShotframeResult<Option<ExportedArtifact>> {
        let Some(user_image) = user_image else {
            tracing::debug!("no user image; export skipped");
            return Ok(None);
        };
        let artifact = self.render(settings, user_image, at)?;
        sink.emit(&artifact)?;
        Ok(Some(artifact))
    }

    /// Everything [`ExportPipeline::export_at`] does except handing the artifact to a sink.
    pub fn render(
        &self,
        settings: &ExportSettings,
        user_image: &AssetSource,
        at: DateTime<Utc>,
    ) -> ShotframeResult<ExportedArtifact> {
        settings.validate()?;

        let frame_source = match &self.config.frame {
            FrameStyle::Asset(c) => Some(AssetSource::Path(self.config.resolve(&c.source))),
            FrameStyle::Drawn(_) => None,
        };
        let font_source = if settings.has_title() {
            let font = self.config.title_font.as_ref().ok_or_else(|| {
                ShotframeError::validation("title text is set but no title_font is configured")
            })?;
            Some(AssetSource::Path(self.config.resolve(font)))
        } else {
            None
        };

        let assets = load_assets(user_image, frame_source.as_ref(), font_source.as_ref())?;
        let request =
            settings
                .clone()
                .into_request(assets.user_image, assets.frame_image, assets.title_font);

        let composed = self.compositor.compose(&request)?;
        let png = encode_png(&composed.surface)?;
        let artifact = ExportedArtifact {
            file_name: artifact_file_name(at),
            width: composed.surface.width(),
            height: composed.surface.height(),
            png,
        };
        tracing::debug!(
            file_name = %artifact.file_name,
            bytes = artifact.png.len(),
            "artifact encoded"
        );
        Ok(artifact)
    }
}
