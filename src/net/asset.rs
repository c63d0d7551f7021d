//! Résumé download with navigation fallback.
//!
//! Preferred path: fetch the PDF with `cache: no-store`, then save it under a
//! friendly file name through an object URL. Any failure on that path
//! (transport error, non-2xx status, save failure) falls back to one
//! navigation to the absolute asset URL, which the browser can always open.
//!
//! The fetch resolves fully before the fallback is considered, so the two
//! paths never both run for one click.
//!
//! TRADE-OFFS
//! ==========
//! Offline, 404 and policy-blocked requests all take the same fallback. The
//! failure reason is logged but not shown.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use async_trait::async_trait;
use url::Url;

use crate::config::SiteConfig;
use crate::state::preferences::Language;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("could not save file: {0}")]
    Save(String),
    #[error("invalid asset url: {0}")]
    InvalidUrl(String),
}

/// A static document with one file per language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeAsset {
    pub language: Language,
}

impl ResumeAsset {
    pub fn for_language(language: Language) -> Self {
        Self { language }
    }

    /// File name offered to the browser's save dialog.
    pub fn file_name(self) -> String {
        let suffix = self.language.code().to_uppercase();
        format!("Wanil_Parfait_CV_UX_UI_{suffix}.pdf")
    }

    /// Path relative to the site base.
    pub fn relative_path(self) -> String {
        format!("cv/{}", self.file_name())
    }
}

/// How a download request ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { file_name: String },
    Navigated { url: String },
}

/// Browser capabilities the download sequence needs.
#[async_trait(?Send)]
pub trait AssetTransport {
    type Payload;

    /// GET `url` bypassing the HTTP cache.
    async fn fetch(&self, url: &str) -> Result<Self::Payload, DownloadError>;

    /// Hand the fetched bytes to the user as `file_name`.
    fn save(&self, payload: Self::Payload, file_name: &str) -> Result<(), DownloadError>;

    /// Page origin used to absolutize the fallback URL.
    fn origin(&self) -> Option<String>;

    /// Navigate the current tab to `url`.
    fn navigate(&self, url: &str);
}

/// Resolve `path` against `origin`.
///
/// # Errors
///
/// Returns [`DownloadError::InvalidUrl`] when `origin` is not an absolute URL.
pub fn absolute_url(origin: &str, path: &str) -> Result<String, DownloadError> {
    let base = Url::parse(origin).map_err(|e| DownloadError::InvalidUrl(format!("{origin}: {e}")))?;
    let joined = base.join(path).map_err(|e| DownloadError::InvalidUrl(format!("{path}: {e}")))?;
    Ok(joined.to_string())
}

/// Download the résumé for `language`, falling back to navigation.
pub async fn download_resume<T: AssetTransport>(
    transport: &T,
    config: &SiteConfig,
    language: Language,
) -> DownloadOutcome {
    let asset = ResumeAsset::for_language(language);
    let path = config.asset_path(&asset.relative_path());
    let file_name = asset.file_name();

    match fetch_and_save(transport, &path, &file_name).await {
        Ok(()) => {
            log::info!("resume saved: {file_name}");
            DownloadOutcome::Saved { file_name }
        }
        Err(err) => {
            log::warn!("resume download failed, navigating instead: path={path} error={err}");
            let url = fallback_url(transport.origin().as_deref(), &path);
            transport.navigate(&url);
            DownloadOutcome::Navigated { url }
        }
    }
}

async fn fetch_and_save<T: AssetTransport>(transport: &T, path: &str, file_name: &str) -> Result<(), DownloadError> {
    let payload = transport.fetch(path).await?;
    transport.save(payload, file_name)
}

fn fallback_url(origin: Option<&str>, path: &str) -> String {
    let Some(origin) = origin else {
        return path.to_owned();
    };
    match absolute_url(origin, path) {
        Ok(url) => url,
        Err(err) => {
            log::warn!("{err}; navigating to site-relative path");
            path.to_owned()
        }
    }
}

/// `gloo-net` fetch plus object-URL download in the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl AssetTransport for BrowserTransport {
    type Payload = Vec<u8>;

    #[cfg_attr(not(feature = "csr"), allow(clippy::unused_async))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .cache(web_sys::RequestCache::NoStore)
                .send()
                .await
                .map_err(|e| DownloadError::Transport(e.to_string()))?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                return Err(DownloadError::Status(status));
            }
            resp.binary()
                .await
                .map_err(|e| DownloadError::Transport(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(DownloadError::Transport(format!("{url}: not available outside the browser")))
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn save(&self, payload: Vec<u8>, file_name: &str) -> Result<(), DownloadError> {
        #[cfg(feature = "csr")]
        {
            save_blob(&payload, file_name)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(DownloadError::Save(format!("{file_name}: not available outside the browser")))
        }
    }

    fn origin(&self) -> Option<String> {
        crate::util::dom::page_origin()
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn navigate(&self, url: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(url) {
                    log::warn!("navigation to {url} failed: {e:?}");
                }
            }
        }
    }
}

#[cfg(feature = "csr")]
fn save_blob(bytes: &[u8], file_name: &str) -> Result<(), DownloadError> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| DownloadError::Save(format!("{e:?}"));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Save("document unavailable".to_owned()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::Save("document has no body".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DownloadError::Save("created element is not an anchor".to_owned()))?;
    anchor.set_href(&object_url);
    anchor.set_download(file_name);

    let clicked = body.append_child(&anchor).map_err(js_err).map(|_| anchor.click());
    anchor.remove();
    if let Err(e) = web_sys::Url::revoke_object_url(&object_url) {
        log::warn!("failed to revoke object url: {e:?}");
    }
    clicked
}
