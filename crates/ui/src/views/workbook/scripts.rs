//! JS snippets run through `document::eval`. The single media element lives
//! on `window.__workbookAudio` so a fresh load can always tear down its
//! predecessor, whichever attempt created it.

use workbook_core::model::AudioKey;

pub(super) const SCROLL_TO_TOP: &str = "window.scrollTo(0, 0);";

pub(super) const OPEN_PRINT_DIALOG: &str = "window.print();";

pub(super) const PAUSE_AUDIO: &str = r"
    (function() {
        const state = window.__workbookAudio;
        if (state && state.el) state.el.pause();
    })();";

pub(super) const RESUME_AUDIO: &str = r"
    (function() {
        const state = window.__workbookAudio;
        if (state && state.el) state.el.play().catch(() => {});
    })();";

pub(super) const RELEASE_AUDIO: &str = r"
    (function() {
        const state = window.__workbookAudio;
        if (state && state.el) {
            state.el.pause();
            state.el.currentTime = 0;
        }
        window.__workbookAudio = null;
    })();";

/// Probe the key's source variants in order; the first one that starts
/// playback wins. Reports `started`, then later `ended`, or `failed` when
/// no variant plays. Always releases the previous element first.
///
/// The new element is stashed on `window.__workbookAudio` *before* its
/// `play()` promise is awaited, tagged with the attempt id. A later request
/// can therefore always reach and pause a still-loading element (pausing
/// rejects the pending promise), and a superseded attempt detects the swap
/// on resolution and tears itself down without reporting.
pub(super) fn load_audio_script(key: AudioKey, attempt: u64) -> String {
    let sources = key.source_urls();
    format!(
        r#"(async function() {{
            const attempt = {attempt};
            const prev = window.__workbookAudio;
            if (prev && prev.el) {{
                prev.el.pause();
                prev.el.currentTime = 0;
            }}
            window.__workbookAudio = null;
            const sources = [{first:?}, {second:?}];
            for (const src of sources) {{
                const el = new Audio(src);
                el.preload = "auto";
                el.addEventListener("ended", () => dioxus.send("ended"));
                window.__workbookAudio = {{ el: el, attempt: attempt }};
                try {{
                    await el.play();
                }} catch (err) {{
                    const current = window.__workbookAudio;
                    if (!current || current.attempt !== attempt) {{
                        return;
                    }}
                    window.__workbookAudio = null;
                    continue;
                }}
                const current = window.__workbookAudio;
                if (!current || current.el !== el || current.attempt !== attempt) {{
                    el.pause();
                    el.currentTime = 0;
                    return;
                }}
                dioxus.send("started");
                return;
            }}
            dioxus.send("failed");
        }})();"#,
        first = sources[0],
        second = sources[1],
    )
}
