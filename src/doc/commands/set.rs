/*!
# `Set <register> <text>`
Also `Set <register>++` and `Set <register>--`.

## Purpose
Store expanded text in a register, or count.

## Remarks
Counting reads the register as a number, zero if it is not one.

## Example
```text
Set total 2 + 2.5
Set total++
Preg total
5.5
```

*/
