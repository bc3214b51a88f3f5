use super::super::action::ApplicationsAction;
use super::EffectContext;
use crate::domain::{Application, ApplicationStatus, RecordId};

pub fn load(ctx: &EffectContext, user_id: RecordId) {
    let gateway = ctx.gateways.applications.clone();
    ctx.spawn(async move {
        match gateway.list_applications(user_id).await {
            Ok(applications) => ApplicationsAction::LoadSuccess { applications }.into(),
            Err(e) => ApplicationsAction::LoadFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn add(ctx: &EffectContext, application: Application) {
    let gateway = ctx.gateways.applications.clone();
    ctx.spawn(async move {
        match gateway.add_application(&application).await {
            Ok(application) => ApplicationsAction::AddSuccess { application }.into(),
            Err(e) => ApplicationsAction::AddFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn update_notes(ctx: &EffectContext, id: RecordId, notes: String, seq: u64) {
    let gateway = ctx.gateways.applications.clone();
    ctx.spawn(async move {
        match gateway.update_notes(id, &notes).await {
            Ok(application) => ApplicationsAction::UpdateNotesSuccess { application, seq }.into(),
            Err(e) => ApplicationsAction::UpdateNotesFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn update_status(ctx: &EffectContext, id: RecordId, status: ApplicationStatus, seq: u64) {
    let gateway = ctx.gateways.applications.clone();
    ctx.spawn(async move {
        match gateway.update_status(id, status).await {
            Ok(application) => ApplicationsAction::UpdateStatusSuccess { application, seq }.into(),
            Err(e) => ApplicationsAction::UpdateStatusFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}

pub fn remove(ctx: &EffectContext, id: RecordId) {
    let gateway = ctx.gateways.applications.clone();
    ctx.spawn(async move {
        match gateway.remove_application(id).await {
            Ok(()) => ApplicationsAction::RemoveSuccess { id }.into(),
            Err(e) => ApplicationsAction::RemoveFailure {
                error: e.to_string(),
            }
            .into(),
        }
    });
}
