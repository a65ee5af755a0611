/*!
# `Break`

## Purpose
Leave every pending call and continue after the first one.

## Remarks
The continuation is read from register `SCS`, which the outermost call
sets. With `SCS` empty, execution continues at the first line. A value
that is not a line of the script stops it with `LINE OUT OF RANGE`.

## Example
```text
main
Goto outer
Print done\n
End
label outer
Goto inner
label inner
Break
done
```

*/
