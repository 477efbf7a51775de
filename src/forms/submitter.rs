//! At-most-one in-flight submission per form.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{FormError, LinkForm, ModuleForm, ModuleSubmission, ResourceSubmission, UploadForm};
use crate::actor::BuilderClient;
use crate::model::{Module, Resource};

/// Sends validated forms to the builder.
///
/// Clones share one pending flag, so hand one `Submitter` (or its clones) to
/// each open form. While a submission is in flight, further submits fail with
/// [`FormError::SubmissionPending`]. The flag is released when the submission
/// finishes, fails, or its future is dropped.
#[derive(Clone)]
pub struct Submitter {
    client: BuilderClient,
    pending: Arc<AtomicBool>,
}

/// Clears the pending flag on drop.
struct PendingSubmission(Arc<AtomicBool>);

impl Drop for PendingSubmission {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Submitter {
    pub fn new(client: BuilderClient) -> Self {
        Self {
            client,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    fn begin(&self) -> Result<PendingSubmission, FormError> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| PendingSubmission(self.pending.clone()))
            .map_err(|_| {
                warn!("Submission already in flight");
                FormError::SubmissionPending
            })
    }

    #[instrument(skip_all, fields(editing = ?form.editing()))]
    pub async fn submit_module(&self, form: &ModuleForm) -> Result<Module, FormError> {
        let submission = form.validate()?;
        let _pending = self.begin()?;
        debug!(?submission, "Submitting module");
        let module = match submission {
            ModuleSubmission::Create(params) => self.client.create_module(params).await?,
            ModuleSubmission::Update { id, update } => {
                self.client.rename_module(id, update.name).await?
            }
        };
        info!(module_id = %module.id, "Module saved");
        Ok(module)
    }

    #[instrument(skip_all, fields(editing = ?form.editing()))]
    pub async fn submit_link(&self, form: &LinkForm) -> Result<Resource, FormError> {
        let submission = form.validate()?;
        self.submit_resource(submission).await
    }

    #[instrument(skip_all, fields(editing = ?form.editing()))]
    pub async fn submit_upload(&self, form: &UploadForm) -> Result<Resource, FormError> {
        let submission = form.validate()?;
        self.submit_resource(submission).await
    }

    async fn submit_resource(&self, submission: ResourceSubmission) -> Result<Resource, FormError> {
        let _pending = self.begin()?;
        debug!(?submission, "Submitting resource");
        let resource = match submission {
            ResourceSubmission::Create(params) => self.client.create_resource(params).await?,
            ResourceSubmission::Update { id, update } => {
                self.client.update_resource(id, update).await?
            }
        };
        info!(resource_id = %resource.id, kind = ?resource.kind(), "Resource saved");
        Ok(resource)
    }
}
