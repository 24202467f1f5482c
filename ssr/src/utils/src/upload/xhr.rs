use std::{cell::RefCell, rc::Rc};

use consts::UPLOAD_FORM_FIELD;
use futures::channel::oneshot;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use super::{ProgressFn, RawResponse, UploadError, UploadKind, UploadTransport};
use crate::api::endpoint;

fn js_err(e: JsValue) -> UploadError {
    UploadError::Network(format!("{e:?}"))
}

/// Browser upload over `XMLHttpRequest`, the only browser API that reports
/// progress for request bodies.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrTransport;

type Outcome = Rc<RefCell<Option<oneshot::Sender<Result<(), UploadError>>>>>;

fn settle(outcome: &Outcome, res: Result<(), UploadError>) {
    if let Some(tx) = outcome.borrow_mut().take() {
        _ = tx.send(res);
    }
}

impl UploadTransport for XhrTransport {
    type Payload = File;

    async fn send(
        &self,
        kind: UploadKind,
        file: File,
        on_progress: ProgressFn,
    ) -> Result<RawResponse, UploadError> {
        let url = endpoint(kind.endpoint_path()).map_err(|e| UploadError::Network(e.to_string()))?;

        let form = FormData::new().map_err(js_err)?;
        form.append_with_blob(UPLOAD_FORM_FIELD, &file)
            .map_err(js_err)?;

        let xhr = XmlHttpRequest::new().map_err(js_err)?;
        xhr.open_with_async("POST", url.as_str(), true)
            .map_err(js_err)?;
        xhr.set_with_credentials(true);

        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
            if ev.length_computable() {
                on_progress(ev.loaded() as u64, ev.total() as u64);
            }
        });
        xhr.upload()
            .map_err(js_err)?
            .set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let (tx, rx) = oneshot::channel();
        let outcome: Outcome = Rc::new(RefCell::new(Some(tx)));

        let on_load = {
            let outcome = outcome.clone();
            Closure::<dyn FnMut()>::new(move || settle(&outcome, Ok(())))
        };
        let on_error = {
            let outcome = outcome.clone();
            Closure::<dyn FnMut()>::new(move || {
                settle(
                    &outcome,
                    Err(UploadError::Network("connection failed".into())),
                )
            })
        };
        let on_abort = {
            let outcome = outcome.clone();
            Closure::<dyn FnMut()>::new(move || {
                settle(&outcome, Err(UploadError::Network("request aborted".into())))
            })
        };
        xhr.set_onload(Some(on_load.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(on_abort.as_ref().unchecked_ref()));

        log::debug!("uploading {} to {url}", kind.label());
        xhr.send_with_opt_form_data(Some(&form)).map_err(js_err)?;

        let res = rx
            .await
            .map_err(|_| UploadError::Network("request dropped".into()));

        // handlers must outlive the request
        drop((progress, on_load, on_error, on_abort));
        res??;

        let status = xhr.status().map_err(js_err)?;
        let body = xhr.response_text().map_err(js_err)?.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}
