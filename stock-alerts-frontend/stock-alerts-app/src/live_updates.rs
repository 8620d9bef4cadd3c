use futures::channel::oneshot;
#[cfg(feature = "csr")]
use futures::{
    future::{select, Either},
    StreamExt,
};
#[cfg(feature = "csr")]
use gloo_net::eventsource::futures::EventSource;
use leptos::prelude::on_cleanup;
#[cfg(feature = "csr")]
use leptos::task::spawn_local;
#[cfg(feature = "csr")]
use stock_alerts_api_types::events::LiveEvent;

/// Resolves once the current reactive owner is cleaned up.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn stop_on_cleanup() -> oneshot::Receiver<()> {
    let (stop, stopped) = oneshot::channel();
    on_cleanup(move || {
        let _ = stop.send(());
    });
    stopped
}

/// Calls `on_update` every time the server pushes `update` on the event stream at `path`.
///
/// The stream is closed when the calling component is torn down, or as soon as
/// `on_update` returns `false`. The browser's EventSource reconnects on its own,
/// errors are only logged.
#[cfg(feature = "csr")]
pub(crate) fn listen_for_updates(path: String, on_update: impl Fn() -> bool + 'static) {
    let stopped = stop_on_cleanup();
    spawn_local(async move {
        let mut source = match EventSource::new(&path) {
            Ok(source) => source,
            Err(e) => {
                log::error!("Failed to open event stream {path}: {e:?}");
                return;
            }
        };
        let mut messages = match source.subscribe("message") {
            Ok(messages) => messages,
            Err(e) => {
                log::error!("Failed to subscribe to {path}: {e:?}");
                return;
            }
        };
        log::info!("Listening for live updates on {path}");
        let listen = std::pin::pin!(async {
            while let Some(event) = messages.next().await {
                match event {
                    Ok((_, message)) => {
                        let message: web_sys::MessageEvent = message;
                        let payload = message.data().as_string().unwrap_or_default();
                        match LiveEvent::parse(&payload) {
                            LiveEvent::Update => {
                                log::info!("Live update received");
                                if !on_update() {
                                    break;
                                }
                            }
                            LiveEvent::Other(other) => {
                                log::debug!("Ignoring live event {other:?}")
                            }
                        }
                    }
                    Err(e) => log::error!("Event stream error {e:?}"),
                }
            }
        });
        match select(listen, stopped).await {
            Either::Left(_) => log::info!("Event stream {path} finished"),
            Either::Right(_) => log::info!("Closing event stream {path}"),
        }
        source.close();
    });
}

#[cfg(not(feature = "csr"))]
pub(crate) fn listen_for_updates(path: String, on_update: impl Fn() -> bool + 'static) {
    let _ = on_update;
    log::info!("Live updates from {path} need a browser, skipping");
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn cleanup_of_the_owner_stops_the_listener() {
        let owner = Owner::new();
        let mut stopped = owner.with(stop_on_cleanup);
        assert_eq!(stopped.try_recv(), Ok(None));
        owner.cleanup();
        assert_eq!(stopped.try_recv(), Ok(Some(())));
    }

    #[test]
    fn listener_keeps_waiting_while_the_owner_lives() {
        let owner = Owner::new();
        let mut stopped = owner.with(stop_on_cleanup);
        assert_eq!(stopped.try_recv(), Ok(None));
        drop(owner.clone());
        assert_eq!(stopped.try_recv(), Ok(None));
    }
}
