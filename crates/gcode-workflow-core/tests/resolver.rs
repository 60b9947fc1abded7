use gcode_workflow_core::{
    ConnectionType, ControlAvailability, PanelInputs, RawPanelInputs, RenderState, UploadState,
    WorkflowPhase, WorkflowState, WorkflowStatus,
};
use proptest::prelude::*;

fn wifi(status: Option<WorkflowStatus>) -> PanelInputs {
    PanelInputs {
        connection_type: Some(ConnectionType::Wifi),
        workflow_status: status,
        ..Default::default()
    }
}

fn serial(state: Option<WorkflowState>) -> PanelInputs {
    PanelInputs {
        connection_type: Some(ConnectionType::Serial),
        workflow_state: state,
        ..Default::default()
    }
}

fn any_status() -> impl Strategy<Value = Option<WorkflowStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(WorkflowStatus::Idle)),
        Just(Some(WorkflowStatus::Running)),
        Just(Some(WorkflowStatus::Paused)),
        Just(Some(WorkflowStatus::Unknown)),
    ]
}

fn any_state() -> impl Strategy<Value = Option<WorkflowState>> {
    prop_oneof![
        Just(None),
        Just(Some(WorkflowState::Idle)),
        Just(Some(WorkflowState::Running)),
        Just(Some(WorkflowState::Paused)),
        Just(Some(WorkflowState::Unknown)),
    ]
}

fn any_connection() -> impl Strategy<Value = Option<ConnectionType>> {
    prop_oneof![
        Just(None),
        Just(Some(ConnectionType::Wifi)),
        Just(Some(ConnectionType::Serial)),
        Just(Some(ConnectionType::Other)),
    ]
}

fn any_inputs() -> impl Strategy<Value = PanelInputs> {
    (
        any_connection(),
        any_status(),
        any_state(),
        prop_oneof![
            Just(UploadState::Idle),
            Just(UploadState::Uploading),
            Just(UploadState::Uploaded),
        ],
        prop_oneof![
            Just(RenderState::Idle),
            Just(RenderState::Rendering),
            Just(RenderState::Rendered),
        ],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                connection_type,
                workflow_status,
                workflow_state,
                upload_state,
                render_state,
                is_connected,
                is_server_waiting,
            )| PanelInputs {
                connection_type,
                workflow_status,
                workflow_state,
                upload_state,
                render_state,
                is_connected,
                is_server_waiting,
            },
        )
}

#[test]
fn test_upload_only_for_idle_or_unknown() {
    let cases = [
        (wifi(Some(WorkflowStatus::Idle)), true),
        (wifi(Some(WorkflowStatus::Unknown)), true),
        (wifi(Some(WorkflowStatus::Running)), false),
        (wifi(Some(WorkflowStatus::Paused)), false),
        (wifi(None), false),
        (serial(Some(WorkflowState::Idle)), true),
        (serial(Some(WorkflowState::Running)), false),
        (serial(Some(WorkflowState::Paused)), false),
        (serial(Some(WorkflowState::Unknown)), true),
        (serial(None), false),
    ];

    for (inputs, expected) in cases {
        assert_eq!(
            ControlAvailability::resolve(&inputs).can_upload,
            expected,
            "{:?}",
            inputs
        );
    }
}

#[test]
fn test_play_boundary_combinations() {
    for mask in 0u8..16 {
        let connected = mask & 1 != 0;
        let rendered = mask & 2 != 0;
        let uploaded = mask & 4 != 0;
        let running = mask & 8 != 0;

        let inputs = PanelInputs {
            connection_type: Some(ConnectionType::Serial),
            workflow_status: None,
            workflow_state: Some(if running {
                WorkflowState::Running
            } else {
                WorkflowState::Idle
            }),
            upload_state: if uploaded {
                UploadState::Uploaded
            } else {
                UploadState::Idle
            },
            render_state: if rendered {
                RenderState::Rendered
            } else {
                RenderState::Rendering
            },
            is_connected: connected,
            is_server_waiting: false,
        };

        let expected = connected && rendered && uploaded && !running;
        assert_eq!(
            ControlAvailability::resolve(&inputs).can_play,
            expected,
            "connected={} rendered={} uploaded={} running={}",
            connected,
            rendered,
            uploaded,
            running
        );
    }
}

#[test]
fn test_wifi_ignores_upload_state() {
    let inputs = PanelInputs {
        connection_type: Some(ConnectionType::Wifi),
        workflow_status: Some(WorkflowStatus::Idle),
        upload_state: UploadState::Idle,
        render_state: RenderState::Rendered,
        is_connected: true,
        ..Default::default()
    };
    assert!(ControlAvailability::resolve(&inputs).can_play);
}

#[test]
fn test_close_requires_render_and_idle() {
    let mut inputs = serial(Some(WorkflowState::Idle));
    assert!(!ControlAvailability::resolve(&inputs).can_close);

    inputs.render_state = RenderState::Rendered;
    assert!(ControlAvailability::resolve(&inputs).can_close);

    inputs.workflow_state = Some(WorkflowState::Paused);
    assert!(!ControlAvailability::resolve(&inputs).can_close);
}

#[test]
fn test_wifi_running_scenario_from_raw_inputs() {
    let raw = RawPanelInputs::from_json(
        r#"{ "uploadState": "idle", "connectionType": "wifi", "workflowStatus": "RUNNING",
             "state": { "gcode": { "renderState": "rendered" }, "workflowState": "idle" } }"#,
    )
    .unwrap();
    let a = ControlAvailability::resolve(&PanelInputs::from(&raw));

    assert_eq!(a.phase, Some(WorkflowPhase::Running));
    assert!(a.can_pause);
    assert!(!a.can_play);
    assert!(!a.can_upload);
}

#[test]
fn test_client_idle_scenario_from_raw_inputs() {
    let raw = RawPanelInputs::from_json(
        r#"{ "uploadState": "uploaded", "isConnected": true,
             "state": { "gcode": { "renderState": "rendered" }, "workflowState": "idle" } }"#,
    )
    .unwrap();
    let a = ControlAvailability::resolve(&PanelInputs::from(&raw));

    assert!(a.can_upload);
    assert!(a.can_play);
    assert!(a.can_close);
}

#[test]
fn test_client_unknown_state_accepts_new_job() {
    let raw = RawPanelInputs::from_json(
        r#"{ "state": { "gcode": { "renderState": "rendered" }, "workflowState": "unknown" } }"#,
    )
    .unwrap();
    let a = ControlAvailability::resolve(&PanelInputs::from(&raw));

    assert_eq!(a.phase, Some(WorkflowPhase::Unknown));
    assert!(a.can_upload);
    assert!(a.can_close);
    assert!(!a.can_play);
}

proptest! {
    #[test]
    fn prop_pause_and_stop_track_phase(inputs in any_inputs()) {
        let a = ControlAvailability::resolve(&inputs);
        let phase = inputs.phase();

        prop_assert_eq!(a.can_pause, phase == Some(WorkflowPhase::Running));
        prop_assert_eq!(a.can_stop, phase == Some(WorkflowPhase::Paused));
        prop_assert!(!(a.can_pause && a.can_stop));
    }

    #[test]
    fn prop_close_implies_upload_and_render(inputs in any_inputs()) {
        let a = ControlAvailability::resolve(&inputs);
        if a.can_close {
            prop_assert!(a.can_upload);
            prop_assert!(inputs.is_rendered());
        }
    }

    #[test]
    fn prop_server_waiting_gates_all_but_upload(inputs in any_inputs()) {
        let a = ControlAvailability::resolve(&inputs);
        if inputs.is_server_waiting {
            prop_assert!(!a.run_enabled());
            prop_assert!(!a.pause_enabled());
            prop_assert!(!a.stop_enabled());
            prop_assert!(!a.close_enabled());
        }
        prop_assert_eq!(a.upload_enabled(), a.can_upload);
    }

    #[test]
    fn prop_only_authoritative_vocabulary_matters(inputs in any_inputs(), other in any_state()) {
        prop_assume!(inputs.is_wifi());
        let swapped = PanelInputs { workflow_state: other, ..inputs };
        prop_assert_eq!(
            ControlAvailability::resolve(&inputs),
            ControlAvailability::resolve(&swapped)
        );
    }
}
