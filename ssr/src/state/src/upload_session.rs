use utils::{
    sink::ValueSink,
    upload::{
        progress_percent, validate, FileMeta, ProgressFn, SelectedFile, UploadError, UploadKind,
        UploadTransport, UploadedFile,
    },
};

use crate::{cell::StateCell, toast::Notifier};

/// Local state of the one upload a control can have going at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadSession {
    file: Option<FileMeta>,
    progress: u8,
    uploading: bool,
    resolved_url: Option<String>,
}

impl UploadSession {
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn file(&self) -> Option<&FileMeta> {
        self.file.as_ref()
    }

    /// Served URL of the last successful upload, used for the inline preview
    pub fn resolved_url(&self) -> Option<&str> {
        self.resolved_url.as_deref()
    }

    pub fn begin(&mut self, file: FileMeta) -> Result<(), UploadError> {
        if self.uploading {
            return Err(UploadError::Busy);
        }
        self.file = Some(file);
        self.progress = 0;
        self.uploading = true;
        Ok(())
    }

    pub fn record_progress(&mut self, sent: u64, total: u64) {
        if self.uploading {
            self.progress = progress_percent(sent, total);
        }
    }

    pub fn finish(&mut self, res: &Result<UploadedFile, UploadError>) {
        self.uploading = false;
        if let Ok(uploaded) = res {
            self.progress = 100;
            self.resolved_url = Some(uploaded.url.clone());
        }
    }

    /// Drops the file, preview and progress. A request still in flight keeps
    /// its flag so a second upload cannot start underneath it.
    pub fn clear(&mut self) {
        *self = Self {
            uploading: self.uploading,
            ..Default::default()
        };
    }
}

/// Validates `file`, uploads it and reports the served URL to `on_resolved`.
///
/// Nothing is sent when the file fails validation or another upload of the
/// same session is still pending; both are surfaced through `notifier`.
pub async fn run_upload<T, C, S, N>(
    kind: UploadKind,
    transport: &T,
    file: SelectedFile<T::Payload>,
    session: C,
    on_resolved: &S,
    notifier: &N,
) -> Result<UploadedFile, UploadError>
where
    T: UploadTransport,
    C: StateCell<UploadSession>,
    S: ValueSink + ?Sized,
    N: Notifier + ?Sized,
{
    if let Err(e) = validate(kind, &file.meta) {
        log::warn!("rejected {} {:?}: {e}", kind.label(), file.meta.name);
        notifier.error(e.to_string());
        return Err(e.into());
    }

    let mut started = Ok(());
    session.write_cell(|s| started = s.begin(file.meta.clone()));
    if let Err(e) = started {
        log::warn!("ignored {} {:?}: {e}", kind.label(), file.meta.name);
        notifier.error(e.user_message(kind));
        return Err(e);
    }

    let progress_session = session.clone();
    let on_progress: ProgressFn = Box::new(move |sent, total| {
        progress_session.write_cell(|s| s.record_progress(sent, total))
    });

    let res = transport
        .send(kind, file.payload, on_progress)
        .await
        .and_then(|raw| raw.interpret());
    session.write_cell(|s| s.finish(&res));

    match &res {
        Ok(uploaded) => {
            log::info!(
                "{} uploaded to {} (public id {:?})",
                kind.label(),
                uploaded.url,
                uploaded.public_id
            );
            on_resolved.report(uploaded.url.clone());
            notifier.success(kind.success_message());
        }
        Err(e) => {
            log::error!("error uploading {}: {e}", kind.label());
            notifier.error(e.user_message(kind));
        }
    }
    res
}

/// Whether the file input should be emptied after `res` so the same file can
/// be picked again. Never true while another upload holds the session, nor
/// once the session has been disposed along with its control.
pub fn input_needs_reset<C>(session: &C, res: &Result<UploadedFile, UploadError>) -> bool
where
    C: StateCell<UploadSession>,
{
    res.is_err()
        && session
            .try_read_cell(|s| !s.is_uploading())
            .unwrap_or(false)
}

/// Forgets the uploaded file and empties the owner's field.
pub fn clear_upload<C, S>(session: &C, on_resolved: &S)
where
    C: StateCell<UploadSession>,
    S: ValueSink + ?Sized,
{
    session.write_cell(UploadSession::clear);
    on_resolved.report(String::new());
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use futures::executor::block_on;
    use leptos::prelude::*;
    use utils::upload::RawResponse;

    use super::*;
    use crate::test_support::{RecordingNotifier, Reported};

    /// Replays canned progress events then answers with a fixed response
    struct MockTransport {
        calls: Cell<usize>,
        progress: Vec<(u64, u64)>,
        response: Result<RawResponse, UploadError>,
        seen_progress: Rc<RefCell<Vec<u8>>>,
        session: Option<Rc<RefCell<UploadSession>>>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                progress: Vec::new(),
                response: Ok(RawResponse {
                    status,
                    body: body.into(),
                }),
                seen_progress: Rc::default(),
                session: None,
            }
        }
    }

    impl UploadTransport for MockTransport {
        type Payload = ();

        async fn send(
            &self,
            _kind: UploadKind,
            _payload: (),
            on_progress: ProgressFn,
        ) -> Result<RawResponse, UploadError> {
            self.calls.set(self.calls.get() + 1);
            for &(sent, total) in &self.progress {
                on_progress(sent, total);
                if let Some(session) = &self.session {
                    let s = session.borrow();
                    assert!(s.is_uploading());
                    self.seen_progress.borrow_mut().push(s.progress());
                }
            }
            self.response.clone()
        }
    }

    fn file(mime: &str, size: u64) -> SelectedFile<()> {
        SelectedFile {
            meta: FileMeta {
                name: "clip.mp4".into(),
                mime: mime.into(),
                size,
            },
            payload: (),
        }
    }

    #[test]
    fn wrong_type_is_rejected_without_request() {
        let transport = MockTransport::replying(200, r#"{"url":"/videos/x.mp4"}"#);
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Video,
            &transport,
            file("image/png", 1024),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert!(matches!(res, Err(UploadError::Invalid(_))));
        assert_eq!(transport.calls.get(), 0);
        assert!(reported.values().is_empty());
        assert_eq!(notifier.errors(), vec!["Please select a video file"]);
        assert_eq!(*session.borrow(), UploadSession::default());
    }

    #[test]
    fn oversized_thumbnail_is_rejected_without_request() {
        let transport = MockTransport::replying(200, r#"{"url":"/thumbs/x.png"}"#);
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Thumbnail,
            &transport,
            file("image/png", 10 * 1024 * 1024 + 1),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert!(matches!(res, Err(UploadError::Invalid(_))));
        assert_eq!(transport.calls.get(), 0);
        assert!(reported.values().is_empty());
        assert_eq!(notifier.errors(), vec!["Image file must be less than 10MB"]);
        assert!(!session.borrow().is_uploading());
    }

    #[test]
    fn successful_video_upload_resolves_url() {
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let mut transport = MockTransport::replying(
            200,
            r#"{"url":"/videos/abc.mp4","publicId":"videos/abc","message":"Video uploaded successfully"}"#,
        );
        transport.progress = vec![(0, 300), (100, 300), (299, 300), (300, 300)];
        transport.session = Some(session.clone());
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Video,
            &transport,
            file("video/mp4", 300),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert_eq!(res.unwrap().url, "/videos/abc.mp4");
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(*transport.seen_progress.borrow(), vec![0, 33, 99, 100]);
        assert_eq!(reported.values(), vec!["/videos/abc.mp4"]);
        assert_eq!(notifier.successes(), vec!["Video uploaded successfully!"]);

        let s = session.borrow();
        assert!(!s.is_uploading());
        assert_eq!(s.resolved_url(), Some("/videos/abc.mp4"));
        assert_eq!(s.file().map(|f| f.name.as_str()), Some("clip.mp4"));
    }

    #[test]
    fn server_rejection_surfaces_message_and_clears_flag() {
        let transport =
            MockTransport::replying(400, r#"{"message":"Only video files are allowed"}"#);
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Video,
            &transport,
            file("video/quicktime", 10),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert!(matches!(res, Err(UploadError::Rejected { status: 400, .. })));
        assert_eq!(notifier.errors(), vec!["Only video files are allowed"]);
        assert!(reported.values().is_empty());
        assert!(!session.borrow().is_uploading());
        assert_eq!(session.borrow().resolved_url(), None);
    }

    #[test]
    fn network_failure_uses_generic_message() {
        let mut transport = MockTransport::replying(200, "");
        transport.response = Err(UploadError::Network("connection failed".into()));
        let session = Rc::new(RefCell::new(UploadSession::default()));
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Thumbnail,
            &transport,
            file("image/gif", 10),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert!(res.is_err());
        assert_eq!(notifier.errors(), vec!["Failed to upload thumbnail"]);
        assert!(!session.borrow().is_uploading());
    }

    #[test]
    fn second_upload_is_ignored_while_pending() {
        let transport = MockTransport::replying(200, r#"{"url":"/videos/second.mp4"}"#);
        let mut pending = UploadSession::default();
        pending
            .begin(FileMeta {
                name: "first.mp4".into(),
                mime: "video/mp4".into(),
                size: 10,
            })
            .unwrap();
        pending.record_progress(5, 10);
        let session = Rc::new(RefCell::new(pending.clone()));
        let reported = Reported::default();
        let notifier = RecordingNotifier::default();

        let res = block_on(run_upload(
            UploadKind::Video,
            &transport,
            file("video/mp4", 10),
            session.clone(),
            &reported.sink(),
            &notifier,
        ));

        assert_eq!(res, Err(UploadError::Busy));
        assert_eq!(transport.calls.get(), 0);
        assert!(reported.values().is_empty());
        assert_eq!(notifier.errors(), vec!["An upload is already in progress"]);
        assert_eq!(*session.borrow(), pending);
    }

    #[test]
    fn progress_after_finish_is_ignored() {
        let mut s = UploadSession::default();
        s.record_progress(5, 10);
        assert_eq!(s.progress(), 0);

        s.begin(FileMeta {
            name: "a.png".into(),
            mime: "image/png".into(),
            size: 10,
        })
        .unwrap();
        s.record_progress(5, 10);
        assert_eq!(s.progress(), 50);
        s.finish(&Err(UploadError::MissingUrl));
        s.record_progress(10, 10);
        assert_eq!(s.progress(), 50);
        assert!(!s.is_uploading());
    }

    #[test]
    fn clear_resets_session_and_owner_field() {
        let session = Rc::new(RefCell::new(UploadSession::default()));
        session.borrow_mut().finish(&Ok(UploadedFile {
            url: "/thumbs/a.png".into(),
            public_id: None,
        }));
        let reported = Reported::default();

        clear_upload(&session, &reported.sink());

        assert_eq!(*session.borrow(), UploadSession::default());
        assert_eq!(reported.values(), vec![String::new()]);
    }

    #[test]
    fn clear_keeps_in_flight_flag() {
        let mut s = UploadSession::default();
        s.begin(FileMeta {
            name: "a.mp4".into(),
            mime: "video/mp4".into(),
            size: 10,
        })
        .unwrap();
        s.record_progress(3, 10);
        s.clear();
        assert!(s.is_uploading());
        assert_eq!(s.progress(), 0);
        assert!(s.file().is_none());
    }

    /// Tears the session signal down mid-request, like a control unmounting
    /// while its upload is still running.
    struct UnmountingTransport {
        session: RwSignal<UploadSession>,
    }

    impl UploadTransport for UnmountingTransport {
        type Payload = ();

        async fn send(
            &self,
            _kind: UploadKind,
            _payload: (),
            _on_progress: ProgressFn,
        ) -> Result<RawResponse, UploadError> {
            self.session.dispose();
            Err(UploadError::Network("connection failed".into()))
        }
    }

    #[test]
    fn upload_outliving_its_control_fails_quietly() {
        let owner = Owner::new();
        owner.with(|| {
            let session = RwSignal::new(UploadSession::default());
            let transport = UnmountingTransport { session };
            let notifier = RecordingNotifier::default();

            let res = block_on(run_upload(
                UploadKind::Video,
                &transport,
                file("video/mp4", 10),
                session,
                &|_: String| {},
                &notifier,
            ));

            assert_eq!(res, Err(UploadError::Network("connection failed".into())));
            assert_eq!(notifier.errors(), vec!["Failed to upload video"]);
            assert!(!input_needs_reset(&session, &res));
        });
    }

    #[test]
    fn input_is_reset_only_after_a_settled_failure() {
        let failed = Err(UploadError::MissingUrl);
        let done = Ok(UploadedFile {
            url: "/videos/a.mp4".into(),
            public_id: None,
        });

        let idle = Rc::new(RefCell::new(UploadSession::default()));
        assert!(input_needs_reset(&idle, &failed));
        assert!(!input_needs_reset(&idle, &done));

        let busy = Rc::new(RefCell::new(UploadSession::default()));
        busy.borrow_mut()
            .begin(FileMeta {
                name: "first.mp4".into(),
                mime: "video/mp4".into(),
                size: 10,
            })
            .unwrap();
        assert!(!input_needs_reset(&busy, &Err(UploadError::Busy)));
    }
}
