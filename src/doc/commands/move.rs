/*!
# `Move <x> <y>`
Also `MotionNotify <x> <y>` and `RelativeMove <dx> <dy>`.

## Purpose
Move the pointer to a position or by an offset.

## Remarks
Coordinates are multiplied by the `-s` scale and truncated toward zero.

*/
