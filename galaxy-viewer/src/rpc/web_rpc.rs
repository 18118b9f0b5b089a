use crate::engine::galaxy::editor::{GalaxyEditor, rejection_payload};
use crate::engine::galaxy::regenerate::CurrentGalaxy;
use crate::engine::systems::fps_tracking::smoothed_fps;
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use galaxy_generator::GenerationConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
}

/// JSON-RPC 2.0 error object.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

/// Resource managing bidirectional RPC communication between the host page
/// and Bevy. Handles both request-response patterns and notifications.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Only string payloads can carry JSON-RPC.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Resources an RPC method may read or edit.
pub struct RpcContext<'a> {
    pub diagnostics: &'a DiagnosticsStore,
    /// Absent until the preset has loaded.
    pub editor: Option<&'a mut GalaxyEditor>,
    pub current: &'a CurrentGalaxy,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut editor: Option<ResMut<GalaxyEditor>>,
    current: Res<CurrentGalaxy>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                let mut context = RpcContext {
                    diagnostics: &diagnostics,
                    editor: editor.as_deref_mut(),
                    current: &current,
                };
                if let Some(response) =
                    handle_rpc_request(&request, &mut context, &mut rpc_interface)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
pub fn handle_rpc_request(
    request: &RpcRequest,
    context: &mut RpcContext,
    rpc_interface: &mut WebRpcInterface,
) -> Option<RpcResponse> {
    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "get_parameters" => handle_get_parameters(context.editor.as_deref()),
        "set_parameters" => handle_set_parameters(
            &request.params,
            context.editor.as_deref_mut(),
            rpc_interface,
        ),
        "regenerate" => handle_regenerate(context.editor.as_deref_mut()),
        "get_point_count" => Ok(json!({
            "point_count": context.current.point_count(),
            "generation": context.current.generation(),
        })),
        "get_fps" => handle_get_fps(context.diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

fn handle_get_parameters(editor: Option<&GalaxyEditor>) -> Result<Value, RpcError> {
    let editor = editor.ok_or_else(RpcError::not_ready)?;
    Ok(json!({
        "parameters": editor.settled()
    }))
}

/// Merge a partial parameter object into the settled config and settle it.
/// Rejections answer with the parameters still in force.
fn handle_set_parameters(
    params: &Value,
    editor: Option<&mut GalaxyEditor>,
    rpc_interface: &mut WebRpcInterface,
) -> Result<Value, RpcError> {
    let editor = editor.ok_or_else(RpcError::not_ready)?;
    let updates = params
        .as_object()
        .ok_or_else(|| RpcError::invalid_params("Expected an object of galaxy parameters"))?;
    let updated = merge_parameters(editor.settled(), updates)
        .map_err(|message| RpcError::invalid_params(&message))?;

    match editor.apply(|config| *config = updated) {
        Ok(changed) => {
            info!("Galaxy parameters set over RPC (changed: {})", changed);
            Ok(json!({
                "success": true,
                "changed": changed,
                "parameters": editor.settled(),
            }))
        }
        Err(err) => {
            let payload = rejection_payload(&err, editor.settled());
            rpc_interface.send_notification("parameters_rejected", payload.clone());
            Err(RpcError {
                data: Some(payload),
                ..RpcError::invalid_params(&err.to_string())
            })
        }
    }
}

fn handle_regenerate(editor: Option<&mut GalaxyEditor>) -> Result<Value, RpcError> {
    let editor = editor.ok_or_else(RpcError::not_ready)?;
    editor.regenerate();
    Ok(json!({
        "success": true
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<Value, RpcError> {
    let fps = smoothed_fps(diagnostics).unwrap_or(0.0) as f32;

    Ok(json!({
        "fps": fps
    }))
}

/// Overlay `updates` onto `settled`. Keys may be snake_case or camelCase;
/// unknown keys are an error rather than silently dropped.
pub fn merge_parameters(
    settled: &GenerationConfig,
    updates: &Map<String, Value>,
) -> Result<GenerationConfig, String> {
    let mut merged = serde_json::to_value(settled).map_err(|e| e.to_string())?;
    let Value::Object(fields) = &mut merged else {
        return Err("Galaxy parameters did not serialise to an object".to_string());
    };

    for (key, value) in updates {
        let name = field_name(key);
        if !fields.contains_key(&name) {
            return Err(format!("Unknown galaxy parameter: {}", key));
        }
        fields.insert(name, value.clone());
    }

    serde_json::from_value(merged).map_err(|e| format!("Invalid galaxy parameters: {}", e))
}

/// `randomnessPower` -> `randomness_power`, `insideColor` -> `inside_colour`.
fn field_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('_');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }
    match name.strip_suffix("_color") {
        Some(stem) => format!("{}_colour", stem),
        None => name,
    }
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: Value,
    code: i32,
    message: &str,
    data: Option<Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }

    fn not_ready() -> Self {
        Self::internal_error("Galaxy parameters are still loading")
    }
}
