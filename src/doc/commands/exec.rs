/*!
# `Exec <command>`

## Purpose
Start a shell command and carry on without waiting for it.

## Remarks
The command is passed to `sh -c` exactly as written. Registers are not
expanded. Its exit status is logged when `-v` is given.

## Example
```text
Exec xterm -geometry 80x24
Delay 1
```

*/
