//! Browser `fetch` transport built on gloo-net

use crate::core::error::ApiError;
use crate::core::http::{HttpRequest, HttpResponse, HttpTransport};

/// Sends requests with the browser's fetch API
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    #[cfg(not(feature = "ssr"))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use crate::core::http::{HttpMethod, RequestBody};
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            None => builder.build(),
            Some(RequestBody::Json(text)) | Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Multipart(fields)) => builder.body(form_data(&fields)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse::new(status, body))
    }

    #[cfg(feature = "ssr")]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network(format!(
            "{} {} is not available during server rendering",
            request.method.as_str(),
            request.url
        )))
    }
}

/// Build a `FormData` body; the browser picks the multipart boundary
#[cfg(not(feature = "ssr"))]
fn form_data(fields: &[crate::core::http::FormField]) -> Result<web_sys::FormData, ApiError> {
    use crate::core::http::FormValue;

    let to_err = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{:?}", e));
    let form = web_sys::FormData::new().map_err(to_err)?;

    for field in fields {
        match &field.value {
            FormValue::Text(text) => form.append_with_str(&field.name, text).map_err(to_err)?,
            FormValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let parts = js_sys::Array::new();
                parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(content_type);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                    .map_err(to_err)?;
                form.append_with_blob_and_filename(&field.name, &blob, file_name)
                    .map_err(to_err)?;
            }
        }
    }
    Ok(form)
}

/// Read a picked file into memory for upload
#[cfg(not(feature = "ssr"))]
pub async fn read_file(file: &web_sys::File) -> Result<crate::core::lms::UploadFile, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    let content_type = match file.type_() {
        kind if kind.is_empty() => "application/octet-stream".to_string(),
        kind => kind,
    };

    Ok(crate::core::lms::UploadFile {
        name: file.name(),
        content_type,
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
