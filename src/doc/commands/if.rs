/*!
# `If <lhs> <op> <rhs>`
Also `EndIf` and `<command> if <lhs> <op> <rhs>`.

## Purpose
Run lines only when a condition holds.

## Remarks
`op` is `is`, `not` or `like`. Blocks do not nest: a block that is
skipped ends at the first `EndIf`. An `If` with no `EndIf` after it
stops the script with `IF WITHOUT ENDIF`.

## Example
```text
Set a 1
If ${a} is 1
Print one\n
EndIf
Print odd\n if ${a} like [13579]
one
odd
```

*/
