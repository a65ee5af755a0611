/*!
# `KeyStr <name>`
Also `KeyStrPress <name>` and `KeyStrRelease <name>`.

## Purpose
Tap, press, or release a key by keysym name.

## Remarks
Names are the display server's keysym names such as `Return`, `Tab`,
`F1` or `a`. A name with no keycode on the target keyboard is logged and
skipped.

## Example
```text
KeyStrPress Control_L
KeyStr c
KeyStrRelease Control_L
```

*/
