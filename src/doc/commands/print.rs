/*!
# `Print <text>`

## Purpose
Write expanded text to the terminal.

## Remarks
No newline is added. Use `\n` or `EndL`. `\t`, `\r` and `0xNN` byte
literals are also understood.

## Example
```text
Print 0x41 is A\n
A is A
```

*/
