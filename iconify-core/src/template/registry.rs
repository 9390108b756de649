//! Built-in template bodies, stored base64 encoded.
//!
//! Every body may reference `{license}`, `{svg}`, `{svg:base64}`, `{icon}`
//! and `{collection}`; other `{...}` tokens are emitted as written.

/// ESM JavaScript module exporting the SVG string
pub(crate) const RAW: &str = "LyoqCntsaWNlbnNlfQogKi8KY29uc3Qgc3ZnID0gYHtzdmd9YDsKCmV4cG9ydCBkZWZhdWx0IHN2ZzsK";

/// ESM TypeScript module exporting the SVG string
pub(crate) const RAW_TS: &str = "LyoqCntsaWNlbnNlfQogKi8KY29uc3Qgc3ZnOiBzdHJpbmcgPSBge3N2Z31gOwoKZXhwb3J0IGRlZmF1bHQgc3ZnOwo=";

/// Plain SVG file with an XML comment header
pub(crate) const SVG: &str = "PCEtLQp7bGljZW5zZX0KLS0+Cntzdmd9Cg==";

/// Vue single file component
pub(crate) const VUE: &str = "PCEtLQp7bGljZW5zZX0KLS0+Cjx0ZW1wbGF0ZT4KICB7c3ZnfQo8L3RlbXBsYXRlPgoKPHNjcmlwdCBzZXR1cCBsYW5nPSJ0cyI+CmRlZmluZU9wdGlvbnMoeyBuYW1lOiAie2NvbGxlY3Rpb259LXtpY29ufSIgfSk7Cjwvc2NyaXB0Pgo=";

/// PHP 8 file returning the SVG markup
pub(crate) const PHP: &str = "PD9waHAKLyoqCntsaWNlbnNlfQogKi8KCmRlY2xhcmUoc3RyaWN0X3R5cGVzPTEpOwoKcmV0dXJuIGJhc2U2NF9kZWNvZGUoJ3tzdmc6YmFzZTY0fScpOwo=";

/// React component (JSX)
pub(crate) const JSX: &str = "LyoqCntsaWNlbnNlfQogKi8KZXhwb3J0IGRlZmF1bHQgZnVuY3Rpb24gSWNvbihwcm9wcykgewogICAgcmV0dXJuICgKICAgICAgICA8c3BhbgogICAgICAgICAgICB7Li4ucHJvcHN9CiAgICAgICAgICAgIGRhdGEtaWNvbj0ie2NvbGxlY3Rpb259OntpY29ufSIKICAgICAgICAgICAgZGFuZ2Vyb3VzbHlTZXRJbm5lckhUTUw9e3sgX19odG1sOiBhdG9iKCJ7c3ZnOmJhc2U2NH0iKSB9fQogICAgICAgIC8+CiAgICApOwp9Cg==";

/// React component (TSX)
pub(crate) const TSX: &str = "LyoqCntsaWNlbnNlfQogKi8KaW1wb3J0IHR5cGUgeyBIVE1MQXR0cmlidXRlcyB9IGZyb20gInJlYWN0IjsKCmV4cG9ydCBkZWZhdWx0IGZ1bmN0aW9uIEljb24ocHJvcHM6IEhUTUxBdHRyaWJ1dGVzPEhUTUxTcGFuRWxlbWVudD4pIHsKICAgIHJldHVybiAoCiAgICAgICAgPHNwYW4KICAgICAgICAgICAgey4uLnByb3BzfQogICAgICAgICAgICBkYXRhLWljb249Intjb2xsZWN0aW9ufTp7aWNvbn0iCiAgICAgICAgICAgIGRhbmdlcm91c2x5U2V0SW5uZXJIVE1MPXt7IF9faHRtbDogYXRvYigie3N2ZzpiYXNlNjR9IikgfX0KICAgICAgICAvPgogICAgKTsKfQo=";

/// Starter `.iconify.ini` written by `iconify config init`
pub(crate) const CONFIG: &str = "OyBJY29uaWZ5IENMSSBjb25maWd1cmF0aW9uCjsKOyBUaGUgQ0xJIGxvb2tzIGZvciB0aGlzIGZpbGUgaW4gdGhlIHdvcmtpbmcgZGlyZWN0b3J5IGFuZCBldmVyeSBwYXJlbnQKOyBkaXJlY3RvcnkuIEZsYWdzIHBhc3NlZCBvbiB0aGUgY29tbWFuZCBsaW5lIHRha2UgcHJlY2VkZW5jZS4KClthcGldCmhvc3QgPSBhcGkuaWNvbmlmeS5kZXNpZ24KcG9ydCA9IDQ0MwoKW291dHB1dF0KOyBSZWxhdGl2ZSBwYXRocyBhcmUgcmVzb2x2ZWQgYWdhaW5zdCB0aGUgZGlyZWN0b3J5IG9mIHRoaXMgZmlsZS4Kb3V0X2RpciA9IGljb25zCjsgT25lIG9mOiBmbGF0LCBwcmVmaXhlZCwgZ3JvdXBlZApwbGFjZW1lbnQgPSBmbGF0CjsgT25lIG9mOiBsb3dlciwgdXBwZXIsIGNhbWVsLCBwYXNjYWwsIGtlYmFiCm5hbWluZyA9IGtlYmFiCjsgT25lIG9mOiByYXcsIHJhdy10cywgc3ZnLCB2dWUsIHBocCwganN4LCB0c3gKdGVtcGxhdGUgPSBzdmcK";
