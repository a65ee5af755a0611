/*!
# `MoveWindow '<name>',<x>,<y>`

## Purpose
Move the first window whose name contains `<name>`.

## Remarks
The quotes and commas are required; a line in any other shape does
nothing. Coordinates are not scaled.

## Example
```text
MoveWindow 'Terminal',0,0
```

*/
