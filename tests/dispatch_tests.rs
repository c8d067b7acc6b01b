//! Calling bound functions through the registry.

use imgui_script::adapter::FunctionBuilder as F;
use imgui_script::gui::{Color, Gui, SliderFlags, Vec2, Vec4};
use imgui_script::imgui_script_core::{
    ConversionError, Dynamic, FromDynamic, IntoDynamic, NativeError,
};
use imgui_script::{
    BindingOptions, Module, RecordingGui, Registrar, SymbolRegistry, register_interface,
};

fn setup() -> (SymbolRegistry, RecordingGui) {
    let mut engine = SymbolRegistry::with_primitives();
    register_interface::<RecordingGui, _>(&mut engine).unwrap();
    (engine, RecordingGui::new())
}

fn s(text: &str) -> Dynamic {
    Dynamic::from(text)
}

// ============================================================================
// Arguments and return values
// ============================================================================

#[test]
fn button_with_value_type_argument() {
    let (mut engine, mut gui) = setup();

    let ret = engine
        .call(
            "ImGui::Button",
            &mut [s("OK"), Vec2::new(1.0, 2.0).into_dynamic()],
            &mut gui,
        )
        .unwrap();
    assert_eq!(ret, Dynamic::Bool(false));

    gui.activate("OK");
    let ret = engine.call("ImGui::Button", &mut [s("OK")], &mut gui).unwrap();
    assert_eq!(ret, Dynamic::Bool(true));

    assert_eq!(
        gui.calls(),
        [
            "Button(\"OK\", Vec2 { x: 1.0, y: 2.0 })",
            "Button(\"OK\", Vec2 { x: 0.0, y: 0.0 })",
        ]
    );
}

#[test]
fn defaults_match_explicit_arguments() {
    fn audio<G: Gui + 'static>() -> Module {
        Module::new().function(
            F::new("Volume")
                .param::<String>("label")
                .inout::<f32>("v")
                .param_default("v_min", 0.0f32)
                .param_default("v_max", 1.0f32)
                .returns::<bool>()
                .native(|gui: &mut G, args| {
                    let label: String = args.get(0)?;
                    let mut v: f32 = args.get(1)?;
                    let changed = gui.slider_float(
                        &label,
                        &mut v,
                        args.get(2)?,
                        args.get(3)?,
                        "%.2f",
                        SliderFlags::ALWAYS_CLAMP,
                    );
                    args.set(1, v)?;
                    Ok(changed)
                }),
        )
    }

    let (mut engine, mut gui) = setup();
    Registrar::new(&mut engine, BindingOptions::default().with_namespace("Audio"))
        .register(audio::<RecordingGui>())
        .unwrap();

    engine
        .call("Audio::Volume", &mut [s("master"), Dynamic::Float(0.5)], &mut gui)
        .unwrap();
    engine
        .call(
            "Audio::Volume",
            &mut [
                s("master"),
                Dynamic::Float(0.5),
                Dynamic::Float(0.0),
                Dynamic::Float(1.0),
            ],
            &mut gui,
        )
        .unwrap();

    let calls = gui.take_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn too_few_arguments_never_reach_the_backend() {
    let (mut engine, mut gui) = setup();

    let err = engine
        .call("ImGui::SliderFloat", &mut [s("volume")], &mut gui)
        .unwrap_err();
    assert_eq!(
        err,
        NativeError::Arity {
            function: "ImGui::SliderFloat".into(),
            supplied: 1,
            min: 4,
            max: 6,
        }
    );
    assert!(gui.calls().is_empty());
}

#[test]
fn too_many_arguments_are_rejected() {
    let (mut engine, mut gui) = setup();
    let err = engine
        .call("ImGui::End", &mut [Dynamic::Int(1)], &mut gui)
        .unwrap_err();
    assert!(err.is_arity());
    assert!(gui.calls().is_empty());
}

#[test]
fn int_literal_accepted_for_float_parameter() {
    let (mut engine, mut gui) = setup();
    engine
        .call(
            "ImGui::SliderFloat",
            &mut [s("gain"), Dynamic::Float(0.5), Dynamic::Int(0), Dynamic::Int(2)],
            &mut gui,
        )
        .unwrap();
    assert_eq!(
        gui.calls(),
        ["SliderFloat(\"gain\", 0.5, 0.0, 2.0, \"%.3f\", 0)"]
    );
}

#[test]
fn invalid_enum_value_is_an_argument_error() {
    let (mut engine, mut gui) = setup();
    let err = engine
        .call(
            "ImGui::SetNextWindowPos",
            &mut [Vec2::ZERO.into_dynamic(), Dynamic::Int(3)],
            &mut gui,
        )
        .unwrap_err();
    assert_eq!(
        err,
        NativeError::Argument {
            function: "ImGui::SetNextWindowPos".into(),
            index: 1,
            source: ConversionError::InvalidEnumValue {
                value: 3,
                enum_name: "Cond",
            },
        }
    );
    assert!(gui.calls().is_empty());
}

#[test]
fn flag_sets_keep_unknown_bits() {
    let (mut engine, mut gui) = setup();
    let flags = 1 | (1 << 30);
    engine
        .call(
            "ImGui::Begin",
            &mut [s("Stats"), Dynamic::NullHandle, Dynamic::Int(flags)],
            &mut gui,
        )
        .unwrap();
    assert_eq!(
        gui.calls(),
        [format!("Begin(\"Stats\", None, {})", flags)]
    );
}

#[test]
fn overloads_resolve_by_argument_type() {
    let (mut engine, mut gui) = setup();
    engine.call("ImGui::PushID", &mut [s("row")], &mut gui).unwrap();
    engine
        .call("ImGui::PushID", &mut [Dynamic::Int(3)], &mut gui)
        .unwrap();

    let err = engine
        .call("ImGui::PushID", &mut [Dynamic::Bool(true)], &mut gui)
        .unwrap_err();
    assert!(matches!(err, NativeError::NoMatchingOverload { .. }), "{err}");

    assert_eq!(gui.calls(), ["PushID(\"row\")", "PushID(3)"]);
}

#[test]
fn unknown_function() {
    let (mut engine, mut gui) = setup();
    let err = engine
        .call("ImGui::LogText", &mut [s("x")], &mut gui)
        .unwrap_err();
    assert_eq!(
        err,
        NativeError::UnknownFunction {
            name: "ImGui::LogText".into()
        }
    );
}

#[test]
fn wrong_host_is_reported() {
    let (mut engine, _) = setup();
    let err = engine
        .call("ImGui::Separator", &mut [], &mut 0u32)
        .unwrap_err();
    assert!(matches!(err, NativeError::HostMismatch { .. }), "{err}");
}

#[test]
fn returned_strings_and_values() {
    let (mut engine, mut gui) = setup();
    gui.window_pos = Vec2::new(10.0, 20.0);

    let version = engine.call("ImGui::GetVersion", &mut [], &mut gui).unwrap();
    assert_eq!(version.as_str(), Some("1.89.9"));

    let pos = engine.call("ImGui::GetWindowPos", &mut [], &mut gui).unwrap();
    assert_eq!(Vec2::from_dynamic(&pos), Ok(Vec2::new(10.0, 20.0)));
}

// ============================================================================
// Output parameters
// ============================================================================

#[test]
fn checkbox_writes_back_its_value() {
    let (mut engine, mut gui) = setup();
    gui.activate("Enabled");

    let mut args = [s("Enabled"), Dynamic::Bool(false)];
    let changed = engine.call("ImGui::Checkbox", &mut args, &mut gui).unwrap();
    assert_eq!(changed, Dynamic::Bool(true));
    assert_eq!(args[1], Dynamic::Bool(true));
}

#[test]
fn begin_clears_p_open_on_close() {
    let (mut engine, mut gui) = setup();
    gui.request_close("Inspector");

    let mut args = [s("Inspector"), Dynamic::Bool(true)];
    engine.call("ImGui::Begin", &mut args, &mut gui).unwrap();
    assert_eq!(args[1], Dynamic::Bool(false));

    let mut args = [s("Inspector"), Dynamic::NullHandle];
    engine.call("ImGui::Begin", &mut args, &mut gui).unwrap();
    assert_eq!(args[1], Dynamic::NullHandle);
    assert_eq!(gui.calls()[1], "Begin(\"Inspector\", None, 0)");
}

#[test]
fn edited_values_flow_back_to_the_script() {
    let (mut engine, mut gui) = setup();
    gui.edit("name", "Ada".to_string());
    gui.edit("tint", Vec4::new(1.0, 0.0, 0.0, 1.0));

    let mut args = [s("name"), s("")];
    let changed = engine.call("ImGui::InputText", &mut args, &mut gui).unwrap();
    assert_eq!(changed, Dynamic::Bool(true));
    assert_eq!(args[1].as_str(), Some("Ada"));

    let mut args = [s("tint"), Vec4::default().into_dynamic()];
    engine.call("ImGui::ColorEdit4", &mut args, &mut gui).unwrap();
    assert_eq!(Vec4::from_dynamic(&args[1]), Ok(Vec4::new(1.0, 0.0, 0.0, 1.0)));
}

// ============================================================================
// Constructors
// ============================================================================

#[test]
fn constructors_with_defaults_and_overloads() {
    let (mut engine, _) = setup();

    let zero = engine.construct("ImGui::Vec2", &mut []).unwrap();
    assert_eq!(Vec2::from_dynamic(&zero), Ok(Vec2::ZERO));

    let red = engine
        .construct(
            "ImGui::Color",
            &mut [Dynamic::Float(1.0), Dynamic::Int(0), Dynamic::Int(0)],
        )
        .unwrap();
    assert_eq!(Color::from_dynamic(&red), Ok(Color::rgba(1.0, 0.0, 0.0, 1.0)));

    let packed = engine
        .construct("ImGui::Color", &mut [Dynamic::Int(0xFF00_00FF)])
        .unwrap();
    assert_eq!(Color::from_dynamic(&packed), Ok(Color::rgba(1.0, 0.0, 0.0, 1.0)));
}

// ============================================================================
// Handles
// ============================================================================

#[test]
fn draw_list_methods_resolve_this() {
    let (mut engine, mut gui) = setup();

    engine.with_handle_scope(|engine| {
        let list = engine
            .call("ImGui::GetWindowDrawList", &mut [], &mut gui)
            .unwrap();
        assert!(matches!(list, Dynamic::Handle(_)));

        engine
            .call_method(
                "ImGui::DrawList",
                "AddLine",
                list,
                &mut [
                    Vec2::ZERO.into_dynamic(),
                    Vec2::new(5.0, 5.0).into_dynamic(),
                    Dynamic::Int(0xFFFF_FFFF),
                ],
                &mut gui,
            )
            .unwrap();
    });

    assert_eq!(
        gui.calls(),
        ["AddLine(1, Vec2 { x: 0.0, y: 0.0 }, Vec2 { x: 5.0, y: 5.0 }, 4294967295, 1.0)"]
    );
}

#[test]
fn handles_go_stale_when_the_scope_closes() {
    let (mut engine, mut gui) = setup();

    let list = engine.with_handle_scope(|engine| {
        engine
            .call("ImGui::GetForegroundDrawList", &mut [], &mut gui)
            .unwrap()
    });
    assert_eq!(engine.handles().live_count(), 0);

    let err = engine
        .call_method("ImGui::DrawList", "PopClipRect", list, &mut [], &mut gui)
        .unwrap_err();
    assert!(matches!(err, NativeError::StaleHandle { .. }), "{err}");
    assert!(gui.calls().is_empty());
}

#[test]
fn handles_from_unscoped_calls_are_released() {
    let (mut engine, mut gui) = setup();

    let first = engine
        .call("ImGui::GetWindowDrawList", &mut [], &mut gui)
        .unwrap();
    for _ in 0..1000 {
        engine
            .call("ImGui::GetWindowDrawList", &mut [], &mut gui)
            .unwrap();
    }
    assert_eq!(engine.handles().live_count(), 0);

    let err = engine
        .call_method("ImGui::DrawList", "PopClipRect", first, &mut [], &mut gui)
        .unwrap_err();
    assert!(matches!(err, NativeError::StaleHandle { .. }), "{err}");
    assert!(gui.calls().is_empty());
}

#[test]
fn handle_of_another_type_is_rejected() {
    let (mut engine, mut gui) = setup();

    engine.with_handle_scope(|engine| {
        let viewport = engine
            .call("ImGui::GetMainViewport", &mut [], &mut gui)
            .unwrap();
        let err = engine
            .call_method("ImGui::DrawList", "PopClipRect", viewport.clone(), &mut [], &mut gui)
            .unwrap_err();
        assert!(matches!(err, NativeError::HandleTypeMismatch { .. }), "{err}");

        let center = engine
            .call_method("ImGui::Viewport", "GetCenter", viewport, &mut [], &mut gui)
            .unwrap();
        assert_eq!(Vec2::from_dynamic(&center), Ok(Vec2::new(640.0, 360.0)));
    });
}
