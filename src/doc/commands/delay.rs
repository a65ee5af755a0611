/*!
# `Delay <seconds>`
Also `USleep <microseconds>`, `SetMouseDelay <ms>` and `SetKeyPressDelay <ms>`.

## Purpose
Pause the script, or change the delay carried by later events.

## Remarks
`Delay` and `USleep` block everything. `SetMouseDelay` changes the delay
of `Move`, `MotionNotify` and `RelativeMove`. `SetKeyPressDelay` changes
the delay of every key command.

## Example
```text
SetKeyPressDelay 40
Send slowly
Delay 2
```

*/
