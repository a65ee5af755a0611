/*!
# `KeySym <number>`
Also `KeySymPress <number>` and `KeySymRelease <number>`.

## Purpose
Tap, press, or release a key by keysym number.

## Remarks
A tap presses, flushes and releases.

*/
