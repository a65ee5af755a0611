/*!
# `click`
Also `ButtonPress <n>`, `ButtonRelease <n>`, `Down` and `Up`.

## Purpose
Press and release mouse buttons.

## Remarks
`click` presses button 1, pauses for 200 milliseconds and releases it.
`Down` and `Up` press and release button 1. Button events use the delay
given with `-d`.

## Example
```text
Move 10 10
Down
Move 200 10
Up
```

*/
