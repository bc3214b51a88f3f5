use crate::domain::{Application, RecordId};

use super::super::action::ApplicationsAction;
use super::super::command::Command;
use super::super::state::ApplicationsState;

pub fn reduce(state: &mut ApplicationsState, action: ApplicationsAction) -> Vec<Command> {
    match action {
        ApplicationsAction::Load { user_id } => {
            begin(state);
            vec![Command::LoadApplications { user_id }]
        }
        ApplicationsAction::LoadSuccess { applications } => {
            state.applications = applications;
            let applications = &state.applications;
            state
                .latest_update
                .retain(|id, _| applications.iter().any(|a| a.id == Some(*id)));
            settle(state);
            Vec::new()
        }
        ApplicationsAction::Add { application } => {
            begin(state);
            vec![Command::AddApplication { application }]
        }
        ApplicationsAction::AddSuccess { application } => {
            state.applications.push(application);
            settle(state);
            Vec::new()
        }
        ApplicationsAction::UpdateNotes { id, notes } => {
            begin(state);
            let seq = issue_seq(state, id);
            vec![Command::UpdateApplicationNotes { id, notes, seq }]
        }
        ApplicationsAction::UpdateStatus { id, status } => {
            begin(state);
            let seq = issue_seq(state, id);
            vec![Command::UpdateApplicationStatus { id, status, seq }]
        }
        ApplicationsAction::UpdateNotesSuccess { application, seq }
        | ApplicationsAction::UpdateStatusSuccess { application, seq } => {
            merge_update(state, application, seq);
            settle(state);
            Vec::new()
        }
        ApplicationsAction::Remove { id } => {
            begin(state);
            vec![Command::RemoveApplication { id }]
        }
        ApplicationsAction::RemoveSuccess { id } => {
            state.applications.retain(|a| a.id != Some(id));
            state.latest_update.remove(&id);
            settle(state);
            Vec::new()
        }
        ApplicationsAction::LoadFailure { error }
        | ApplicationsAction::AddFailure { error }
        | ApplicationsAction::UpdateNotesFailure { error }
        | ApplicationsAction::UpdateStatusFailure { error }
        | ApplicationsAction::RemoveFailure { error } => {
            state.loading = false;
            state.error = Some(error);
            Vec::new()
        }
    }
}

fn begin(state: &mut ApplicationsState) {
    state.loading = true;
    state.error = None;
}

fn settle(state: &mut ApplicationsState) {
    state.loading = false;
    state.error = None;
}

fn issue_seq(state: &mut ApplicationsState, id: RecordId) -> u64 {
    state.next_update_seq += 1;
    let seq = state.next_update_seq;
    state.latest_update.insert(id, seq);
    seq
}

fn merge_update(state: &mut ApplicationsState, updated: Application, seq: u64) {
    let Some(id) = updated.id else {
        log::warn!("update response without an id, ignoring");
        return;
    };

    let latest = state.latest_update.get(&id).copied().unwrap_or(0);
    if latest > seq {
        log::debug!("dropping stale update for application {id} (seq {seq} < {latest})");
        return;
    }

    if let Some(existing) = state.applications.iter_mut().find(|a| a.id == Some(id)) {
        *existing = updated;
    }
}
