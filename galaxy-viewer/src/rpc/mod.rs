//! Galaxy control protocol spoken with the host page.
//!
//! When the viewer runs in an iframe, the host page drives it with JSON-RPC 2.0
//! messages sent through `postMessage`. Requests carry an `id` and get one
//! response each. Messages without an `id` are dropped. The viewer pushes
//! notifications back unprompted.
//!
//! Parameter keys are accepted in snake_case or camelCase, and `*_color`
//! is read as `*_colour`.
//!
//! ## Methods
//!
//! | Method | Params | Result |
//! |---|---|---|
//! | `get_parameters` | none | `{ "parameters" }` |
//! | `set_parameters` | partial parameter object | `{ "success", "changed", "parameters" }` |
//! | `regenerate` | none | `{ "success" }`, redraws with fresh randomness |
//! | `get_point_count` | none | `{ "point_count", "generation" }` |
//! | `get_fps` | none | `{ "fps" }` |
//!
//! ## Notifications
//!
//! - `galaxy_generated`: a new galaxy is on screen, with its point count,
//!   parameters and bounds.
//! - `parameters_rejected`: an edit was rolled back. Carries the error, the
//!   offending field and the parameters still in force.
//! - `generation_failed`: the generator errored and the old galaxy stays.
//! - `fps_update`: smoothed frame rate, throttled.
//! - `debug_message`: an incoming message could not be parsed.
//!
//! ## Errors
//!
//! - `-32601`: unknown method.
//! - `-32602`: bad params or a rejected edit. `data` holds the rejection payload.
//! - `-32603`: the preset has not loaded yet.

pub mod web_rpc;
