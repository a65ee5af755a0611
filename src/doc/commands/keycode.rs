/*!
# `KeyCodePress <code>`
Also `KeyCodeRelease <code>`.

## Purpose
Press or release a key by its hardware keycode.

*/
